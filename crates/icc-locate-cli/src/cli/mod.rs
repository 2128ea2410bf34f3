//! CLI for the icc-locate manifest resolver.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use icc_locate_core::{config, logging};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_extract, run_resolve, run_serve};

/// Top-level CLI for icc-locate.
#[derive(Debug, Parser)]
#[command(name = "icc-locate")]
#[command(about = "Locate the project.json manifest of a deployed static site", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/icc-locate/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log to stderr instead of the state-dir log file.
    #[arg(long, global = true)]
    pub stderr_log: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the resolver over HTTP (`GET /?path=...`).
    Serve {
        /// Listen address; overrides `listen_addr` from the config.
        #[arg(long, value_name = "ADDR")]
        listen: Option<String>,
    },

    /// Resolve one location and print the JSON response body.
    Resolve {
        /// Domain, domain+folder, or page (e.g. `example.com/app`).
        /// `https://` is assumed when no scheme is given.
        path: String,
    },

    /// Run the manifest extractor on a local bundle file.
    Extract {
        /// Path to a built JavaScript bundle.
        file: PathBuf,
    },

    /// Generate shell completions.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();

        logging::init_with_fallback(cli.stderr_log);

        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let code = match cli.command {
            CliCommand::Serve { listen } => {
                run_serve(&cfg, listen.as_deref()).await?;
                ExitCode::SUCCESS
            }
            CliCommand::Resolve { path } => run_resolve(&cfg, &path).await?,
            CliCommand::Extract { file } => run_extract(&file)?,
            CliCommand::Completions { shell } => {
                let mut cmd = Cli::command();
                clap_complete::generate(shell, &mut cmd, "icc-locate", &mut std::io::stdout());
                ExitCode::SUCCESS
            }
        };

        Ok(code)
    }
}

#[cfg(test)]
mod tests;
