mod commands;
mod format;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check::CheckArgs, show::ShowArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "litinfo", about = "Inspect Litematica schematic metadata")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print metadata for one or more files
    Show(ShowArgs),
    /// Validate files and report which ones fail to decode
    Check(CheckArgs),
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show(args) => args.run(),
        Commands::Check(args) => args.run(),
    }
}
