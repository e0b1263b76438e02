mod cli;
mod commands;
mod config;
mod error;
mod input;
mod output;
mod registry;
mod types;

use std::error::Error;
use std::io::{self, IsTerminal};

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use error::Result;
use registry::RecordAppender;

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let verbose = cli.verbose;
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so they never interleave with prompts on stdout.
/// `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "dlg-register", &mut io::stdout());
        }
        Some(Commands::Init) => {
            commands::init::run(io::stdin().lock(), &mut io::stdout().lock())?;
        }
        Some(Commands::List { json }) => {
            let config = Config::load()?;
            let appender = RecordAppender::new(config.registry_path(cli.file.as_deref()));
            commands::list::run(&appender, json, &mut io::stdout().lock())?;
        }
        // A bad config falls back to defaults and a failed append only changes the
        // status line; the exit status stays 0.
        command => {
            let args = match command {
                Some(Commands::Register(args)) => args,
                _ => Default::default(),
            };
            let config = Config::load_or_default();
            let appender = RecordAppender::new(config.registry_path(cli.file.as_deref()));
            commands::register::run(&appender, args, io::stdin().lock(), &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
