mod cli;
mod commands;
mod driver;
mod env;
mod error;
mod importer;
mod invocation;
mod output;
mod registry;
mod selection;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
