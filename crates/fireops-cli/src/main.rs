//! Fireops - crew assignment for fire station vehicles
//!
//! Runs one assignment session per invocation against the station roster.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(commands::exit_code(&e));
    }
}
