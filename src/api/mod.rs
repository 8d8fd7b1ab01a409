//! # API Module
//!
//! HTTP endpoints for the bot's keep-alive web server. Free hosting
//! platforms idle services that expose no HTTP surface, so the bot serves a
//! small status page and a health check next to its polling loop.
//!
//! ## Endpoints
//!
//! - [`status`] - Human-readable HTML status page at `/`, confirming the
//!   bot process is up.
//! - [`health`] - JSON health check at `/health` for monitoring systems
//!   and platform probes, reporting status and crate version.
//!
//! The module is built on [Axum](https://docs.rs/axum); each endpoint is an
//! async function plugged into the router in [`crate::server`].

mod health;
mod status;

pub use health::health;
pub use status::status;
