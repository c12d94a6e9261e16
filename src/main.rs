//! CLI entry point for flip-aware tile deduplication

use clap::Parser;
use fliptile::io::cli::{Cli, FileProcessor};
use fliptile::io::logging::{init_logging, level_for};

fn main() -> fliptile::Result<()> {
    let cli = Cli::parse();
    init_logging(level_for(cli.quiet, cli.verbose))?;
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
