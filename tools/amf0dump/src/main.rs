mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::dump::DumpArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "amf0dump", about = "Inspect AMF0 encoded files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each decoded value of a file
    Dump(DumpArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dump(args) => args.run(),
    }
}
