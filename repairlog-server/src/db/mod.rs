//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One SQLite file, opened through a small pool
//! - Schema applied idempotently on open; no migration tooling
//! - Parent existence checked inside the write transaction
//! - Foreign keys enforced by the store as a second line

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_in_memory, create_pool_with_options};
pub use repos::computers::{Computer, ComputerWithRepairs};
pub use repos::repairs::Repair;
pub use repos::*;
