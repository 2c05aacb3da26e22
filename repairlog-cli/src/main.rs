//! repairlog CLI - run and manage the computer repair log
//!
//! - `serve`: run the web site
//! - `init-db`: create the store without serving
//! - `config`: inspect configuration
//! - `completions`: shell completion scripts

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

use config::RepairlogConfig;

#[derive(Parser, Debug)]
#[command(
    name = "repairlog",
    author,
    version,
    about = "Track computers and their repair histories",
    long_about = "A small web app for listing, searching and adding computers, \
                  and appending repairs to each computer's history."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.repairlog/config.toml)
    #[arg(long, global = true, env = "REPAIRLOG_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web server
    Serve(commands::serve::ServeArgs),
    /// Create the store file and schema, then exit
    InitDb(commands::init_db::InitDbArgs),
    /// Inspect configuration (path, show)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => {
            let config = RepairlogConfig::load(cli.config.as_deref())?;
            commands::run_serve(args, &config).await?
        }
        Commands::InitDb(args) => {
            let config = RepairlogConfig::load(cli.config.as_deref())?;
            commands::run_init_db(args, &config).await?
        }
        Commands::Config(args) => config::run_config(args, cli.config.as_deref())?,
        Commands::Completions(args) => run_completions(args)?,
    }

    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_parse() {
        let cli = Cli::try_parse_from([
            "repairlog",
            "--debug",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--database",
            "/tmp/x.db",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.bind.map(|b| b.port()), Some(8080));
                assert_eq!(args.database, Some(PathBuf::from("/tmp/x.db")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
