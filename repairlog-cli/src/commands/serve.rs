//! HTTP server command
//!
//! Opens (or creates) the store and runs the site until Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use repairlog_server::db::create_pool_with_options;
use repairlog_server::http::{run_server, ServerConfig};

use crate::config::{Overrides, RepairlogConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "REPAIRLOG_BIND")]
    pub bind: Option<SocketAddr>,

    /// SQLite store file (default: ~/.repairlog/computers.db)
    #[arg(long, env = "REPAIRLOG_DATABASE")]
    pub database: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long, env = "REPAIRLOG_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Maximum pooled store connections
    #[arg(long)]
    pub max_connections: Option<u32>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &RepairlogConfig) -> Result<()> {
    let settings = config.resolve(Overrides {
        bind: args.bind,
        database: args.database,
        max_connections: args.max_connections,
        static_dir: args.static_dir,
    });

    tracing::info!(database = %settings.database.display(), "Opening store");
    let pool = create_pool_with_options(&settings.database, settings.max_connections)
        .await
        .with_context(|| format!("Failed to open store at {}", settings.database.display()))?;

    let server_config = ServerConfig {
        bind_addr: settings.bind,
        static_dir: settings.static_dir,
    };

    // Run server (blocks until shutdown)
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
