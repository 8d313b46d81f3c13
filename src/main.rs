//! Overlap Checker - employee pair overlap analysis
//!
//! A CLI tool that ranks pairs of employees by how long they worked
//! together on shared projects.

use clap::Parser;
use overlap_checker::cli::Cli;
use overlap_checker::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
