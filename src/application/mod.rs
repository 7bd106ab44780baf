//! Application layer: ingest and query orchestration.

pub mod services;
