//! RW CLI - Markdown directive transforms.
//!
//! Provides commands for:
//! - `transform`: Run the directive pipeline over an mdast JSON document
//! - `providers`: List the effective embed providers

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ProvidersArgs, TransformArgs};
use output::Output;

/// RW - Markdown directive transforms.
#[derive(Parser)]
#[command(name = "rw", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform an mdast JSON document.
    Transform(TransformArgs),
    /// List configured embed providers.
    Providers(ProvidersArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Transform(args) if args.verbose);

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Transform(args) => args.execute(),
        Commands::Providers(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Log filter: INFO with `--verbose`, otherwise `RUST_LOG`, defaulting to WARN
/// so collected transform failures are visible.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
