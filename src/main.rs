//! CLI entry point for the pipe loop solver

use clap::Parser;
use pipeloop::io::cli::{Cli, FileProcessor};

fn main() -> pipeloop::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let processor = FileProcessor::new(cli);
    let outcomes = processor.process()?;

    // Allow print for the computed distances, which are the program's output
    #[allow(clippy::print_stdout)]
    for line in processor.format_outcomes(&outcomes) {
        println!("{line}");
    }
    Ok(())
}
