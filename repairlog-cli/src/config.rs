//! Configuration: CLI flags / env > config file > defaults
//!
//! The config file is TOML:
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:5000"
//! static_dir = "/srv/repairlog/static"
//!
//! [database]
//! path = "/var/lib/repairlog/computers.db"
//! max_connections = 5
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use repairlog_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use repairlog_server::http::DEFAULT_BIND;
use serde::{Deserialize, Serialize};

/// Contents of the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepairlogConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSection {
    pub path: Option<PathBuf>,
    pub max_connections: Option<u32>,
}

/// Fully resolved settings the commands run with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub bind: SocketAddr,
    pub database: PathBuf,
    pub max_connections: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<SocketAddr>,
    pub database: Option<PathBuf>,
    pub max_connections: Option<u32>,
    pub static_dir: Option<PathBuf>,
}

impl RepairlogConfig {
    /// Load the config file.
    ///
    /// With no explicit path, a missing default file yields the empty
    /// config. An explicit path must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).with_context(|| {
            format!("Failed to parse config file (invalid TOML): {}", path.display())
        })
    }

    /// Get config file path: ~/.repairlog/config.toml
    pub fn config_path() -> PathBuf {
        home_dir().join(".repairlog").join("config.toml")
    }

    /// Merge with overrides and defaults.
    pub fn resolve(&self, overrides: Overrides) -> Settings {
        Settings {
            bind: overrides
                .bind
                .or(self.server.bind)
                .unwrap_or(DEFAULT_BIND),
            database: overrides
                .database
                .or_else(|| self.database.path.clone())
                .unwrap_or_else(default_db_path),
            max_connections: overrides
                .max_connections
                .or(self.database.max_connections)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            static_dir: overrides
                .static_dir
                .or_else(|| self.server.static_dir.clone()),
        }
    }
}

/// Default store location: ~/.repairlog/computers.db
pub fn default_db_path() -> PathBuf {
    home_dir().join(".repairlog").join("computers.db")
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the resolved configuration as TOML
    Show,
}

pub fn run_config(args: ConfigArgs, explicit: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            let path = explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(RepairlogConfig::config_path);
            println!("{}", path.display());
        }
        ConfigCommands::Show => {
            let settings = RepairlogConfig::load(explicit)?.resolve(Overrides::default());
            let rendered =
                toml::to_string_pretty(&settings).context("Failed to render configuration")?;
            print!("{rendered}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_set() {
        let settings = RepairlogConfig::default().resolve(Overrides::default());
        assert_eq!(settings.bind, DEFAULT_BIND);
        assert_eq!(settings.database, default_db_path());
        assert_eq!(settings.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(settings.static_dir.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let config: RepairlogConfig = toml::from_str(
            r#"
            [server]
            bind = "0.0.0.0:8080"

            [database]
            path = "/tmp/shop.db"
            max_connections = 2
            "#,
        )
        .unwrap();

        let settings = config.resolve(Overrides::default());
        assert_eq!(settings.bind.port(), 8080);
        assert_eq!(settings.database, PathBuf::from("/tmp/shop.db"));
        assert_eq!(settings.max_connections, 2);
    }

    #[test]
    fn overrides_beat_file_values() {
        let config: RepairlogConfig =
            toml::from_str("[database]\npath = \"/tmp/file.db\"\n").unwrap();

        let settings = config.resolve(Overrides {
            database: Some(PathBuf::from("/tmp/flag.db")),
            ..Overrides::default()
        });
        assert_eq!(settings.database, PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<RepairlogConfig, _> = toml::from_str("[server]\nport = 3000\n");
        assert!(result.is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RepairlogConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nstatic_dir = \"static\"\n").unwrap();

        let config = RepairlogConfig::load(Some(&path)).unwrap();
        assert_eq!(config.server.static_dir, Some(PathBuf::from("static")));
    }
}
