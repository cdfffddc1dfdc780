//! moosec - command-line driver for the Moose compiler front end.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use moosec_drv::{Config, EmitType, Options, Session};

/// Moose compiler front end
///
/// Lexes `.moose` files and prints their tokens and diagnostics.
#[derive(Parser, Debug)]
#[command(name = "moosec")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Moose compiler front end", long_about = None)]
struct Cli {
    /// Source files to lex
    #[arg(required = true, value_name = "INPUTS")]
    inputs: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(long, value_enum)]
    emit: Option<EmitType>,

    /// Print phase timings
    #[arg(long)]
    time: bool,

    /// Number of files lexed in parallel (default: from config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,

    /// Enable verbose output
    #[arg(long, env = "MOOSEC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "MOOSEC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "MOOSEC_NO_COLOR")]
    no_color: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let options = resolve_options(&cli, &config);
    let fail_on_error = options.fail_on_error;

    let mut session = Session::new(options);
    let summary = session
        .run(&mut std::io::stdout().lock(), &mut std::io::stderr().lock())
        .context("lexing failed")?;

    if summary.read_failures > 0 {
        bail!("could not read {} file(s)", summary.read_failures);
    }
    if summary.is_failure(fail_on_error) {
        bail!("found {} lexical error(s)", summary.errors);
    }
    Ok(())
}

/// Applies command-line flags on top of the configuration file.
fn resolve_options(cli: &Cli, config: &Config) -> Options {
    let mut options = Options::from_config(cli.inputs.clone(), config);
    if let Some(emit) = cli.emit {
        options.emit = emit;
    }
    if let Some(jobs) = cli.jobs {
        options.jobs = jobs as usize;
    }
    options.time |= cli.time;
    options
}

/// Initialize the logging system on stderr.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
