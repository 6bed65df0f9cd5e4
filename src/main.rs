//! Detective Quest: explore the mansion, collect clues, name the culprit.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
