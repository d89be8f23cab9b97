//! CLI entry point for seeded perfect maze generation

use clap::Parser;
use mazecarve::io::cli::{Cli, MazeJob};

fn main() -> mazecarve::Result<()> {
    let cli = Cli::parse();
    let job = MazeJob::new(cli);
    job.process()
}
