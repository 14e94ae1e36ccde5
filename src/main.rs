//! CLI entry point for the mesa map generator

use clap::Parser;
use mesagen::io::cli::{Cli, MapProcessor};

fn main() -> mesagen::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = MapProcessor::new(cli);
    processor.process()
}
