//! Domain layer: the time-indexed store contract.

pub mod repositories;
