//! Create the store file and schema without starting the server

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use repairlog_server::db::{create_pool, ComputerRepo};

use crate::config::{Overrides, RepairlogConfig};

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite store file (default: ~/.repairlog/computers.db)
    #[arg(long, env = "REPAIRLOG_DATABASE")]
    pub database: Option<PathBuf>,
}

pub async fn run_init_db(args: InitDbArgs, config: &RepairlogConfig) -> Result<()> {
    let settings = config.resolve(Overrides {
        database: args.database,
        ..Overrides::default()
    });
    let path = settings.database;

    let existed = path.exists();
    let pool = create_pool(&path)
        .await
        .with_context(|| format!("Failed to open store at {}", path.display()))?;
    let computers = ComputerRepo::new(&pool)
        .count()
        .await
        .context("Failed to read store")?;
    pool.close().await;

    if existed {
        println!("Store ready at {} ({} computers)", path.display(), computers);
    } else {
        println!("Created store at {}", path.display());
    }
    Ok(())
}
