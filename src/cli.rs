use clap::Parser;

use crate::commands::import;

#[derive(Debug, Parser)]
#[command(name = "swim")]
#[command(about = "Spacewalk export import CLI", long_about = None)]
pub struct Cli {
    /// List entities we understand
    #[arg(long)]
    pub list_entities: bool,

    #[command(flatten)]
    pub import: import::Args,
}
