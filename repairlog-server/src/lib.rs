//! repairlog-server: record keeping for computers and their repairs
//!
//! A small server-rendered web app over a SQLite store. Computers are
//! listed, searched, added and viewed; repairs are appended to a
//! computer's history.

pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod views;

pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
