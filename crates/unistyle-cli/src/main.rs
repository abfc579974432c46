//! `unistyle` - render plain text as styled Unicode from the command line.
//!
//! ```text
//! $ unistyle render -s double-struck "Reals and Naturals"
//! ℝ𝕖𝕒𝕝𝕤 𝕒𝕟𝕕 ℕ𝕒𝕥𝕦𝕣𝕒𝕝𝕤
//! $ echo "strike this" | unistyle render -s strikethrough --copy
//! $ unistyle styles --json
//! ```
//!
//! Exit codes: 0 on success, 2 for an unknown style id, 1 for anything else.

mod cli;
mod clipboard;
mod commands;
mod config;
mod env;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use unistyle::StyleError;

use crate::cli::{Cli, Commands};
use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::env::{RealEnv, RealStdin};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env(&RealEnv);
    init_tracing(&config.log_filter);

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", console::style("error:").red().bold(), err);
            if err.downcast_ref::<StyleError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Styles(args) => {
            let registry = config.registry()?;
            commands::styles(&registry, &args, &mut stdout)
        }
        Commands::Render(args) => {
            let config = config.with_flags(args.style.as_deref(), args.fallback.as_deref());
            let registry = config.registry()?;
            let text = commands::read_text(&args.text, &RealStdin)?;
            let output = commands::render(
                &registry,
                &config.style,
                &text,
                args.limits,
                &mut stdout,
                &mut io::stderr(),
            )?;

            if args.copy {
                clipboard::copy(&output).context("failed to copy to clipboard")?;
            }
            Ok(())
        }
        Commands::Preview(args) => {
            let registry = config.registry()?;
            let text = commands::read_text(&args.text, &RealStdin)?;
            commands::preview(&registry, &args, &text, &mut stdout)
        }
    }
}
