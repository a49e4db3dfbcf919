//! social CLI - command-line front end for the social graph engine
//!
//! Hosts one in-memory network for the lifetime of the process and feeds it
//! commands from an interactive shell, a script, or a single invocation.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::session::Session;
use commands::*;
use config::SocialConfig;
use output::{OutputConfig, OutputFormat};

/// Model a social network and query it.
///
/// Users and friendships live in memory for as long as the process runs.
/// Use the shell for interactive work or feed a script to `social run`.
#[derive(Parser)]
#[command(name = "social")]
#[command(author, version)]
#[command(about = "In-memory social network: friends, shortest paths and recommendations")]
#[command(propagate_version = true)]
#[command(after_help = "Quick Start:
  social shell                 Interactive session
  social run network.txt       Execute a command script
  social exec add_user Alice   Run a single command

Script example:
  add_user Alice
  add_user Bob
  add_friend Alice Bob
  recommend Alice")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    #[command(visible_alias = "sh")]
    Shell,

    /// Execute commands from a script file, one per line
    Run {
        /// Script path, or - for stdin
        script: PathBuf,

        /// Stop at the first failing command
        #[arg(long)]
        fail_fast: bool,
    },

    /// Execute a single command against an empty network
    Exec {
        /// Command name (add_user, shortest_path, recommend, ...)
        command: String,

        /// Command arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .socialrc.toml
    let config = SocialConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Shell => {
            let session = Session::new(OutputConfig::new(format), &config);
            shell::run(&session, config.prompt())
        }
        Commands::Run { script, fail_fast } => {
            let session = Session::new(OutputConfig::new(format), &config);
            run::run(&session, &script, fail_fast)
        }
        Commands::Exec { command, args } => {
            let session = Session::new(OutputConfig::new(format).pretty(), &config);
            exec::run(&session, &command, &args)
        }
    }
}
