//! CLI entry point for wave function collapse texture generation

use clap::Parser;
use wavetile::io::cli::{Cli, FileProcessor};

fn main() -> wavetile::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
