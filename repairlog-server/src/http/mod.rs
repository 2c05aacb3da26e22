//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered HTML pages
//! - Redirect-after-write on every POST
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError, DEFAULT_BIND};
