//! RichDons Budget - catering budget estimation
//!
//! A CLI tool that prices catering events from guest count, event type,
//! menu tier and add-on services.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    richdons_app::logging::init_tracing(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
