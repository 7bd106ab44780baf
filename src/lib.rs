//! # Visited Links
//!
//! A small web service that records the domains of visited links and answers
//! time-window queries over them, built with Axum and Redis.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Repository trait for the time-indexed store
//! - **Application Layer** ([`application`]) - Ingest/query orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis sorted-set repository
//! - **API Layer** ([`api`]) - HTTP handlers and DTOs
//!
//! ## Endpoints
//!
//! - `POST /visited_links` - record the domains of a batch of raw links
//! - `GET /visited_domains?from=..&to=..` - list domains recorded in a time window
//! - `GET /health` - service health
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
