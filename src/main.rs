//! ncpreview - Markdown previews of netCDF files.

use anyhow::{Context, Result};
use clap::Parser;
use std::backtrace::Backtrace;
use std::io::{self, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ncpreview", version)]
#[command(about = "Render a Markdown summary of a netCDF file", long_about = None)]
struct Args {
    /// Path to the NetCDF file to describe
    file: PathBuf,

    /// Write diagnostics to this file instead of standard error
    #[arg(long)]
    log: Option<PathBuf>,

    /// Write the report to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // Help and version requests are not failures.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        },
    };

    if let Err(err) = init_logging(args.log.as_deref()) {
        eprintln!("Error: {:#}", err);
        return ExitCode::FAILURE;
    }
    log_environment();
    panic::set_hook(Box::new(|info| {
        tracing::warn!("{}\n{}", info, Backtrace::capture());
    }));

    match panic::catch_unwind(|| run(&args)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            tracing::error!("Error reading netCDF file: {:#}", err);
            eprintln!("Error reading netCDF file: {:?}", err);
            ExitCode::FAILURE
        },
        Err(_) => {
            eprintln!("Error reading netCDF file: unexpected internal fault");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<()> {
    tracing::info!("Starting to process file: {}", args.file.display());

    let report = ncpreview::build_report(&args.file)
        .with_context(|| format!("failed to describe {}", args.file.display()))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, report.as_bytes())
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        },
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write report to standard output")?;
        },
    }

    Ok(())
}

/// Route diagnostics to stderr, or to `log_path` when given.
fn init_logging(log_path: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match log_path {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing::subscriber::set_global_default(builder.with_writer(Mutex::new(file)).finish())?;
        },
        None => {
            tracing::subscriber::set_global_default(builder.with_writer(io::stderr).finish())?;
        },
    }

    Ok(())
}

fn log_environment() {
    tracing::info!("ncpreview version: {}", env!("CARGO_PKG_VERSION"));
    match std::env::current_dir() {
        Ok(dir) => tracing::info!("Current working directory: {}", dir.display()),
        Err(e) => tracing::warn!("Current working directory unavailable: {}", e),
    }
}
