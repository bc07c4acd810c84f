mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = commands::Context::from_cli(&cli)?;
    match &cli.command {
        Commands::Extract { file } => commands::extract(&ctx, file),
        Commands::Compress { file } => commands::compress(&ctx, file),
        Commands::GetPath { file } => commands::get_path(&ctx, file.as_deref()),
        Commands::RemoveProfile => commands::remove(&ctx),
        Commands::List => commands::list(&ctx),
    }
}

/// Log to stderr so stdout stays clean for `extract`
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}
