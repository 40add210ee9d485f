use crate::cli::Cli;

pub mod import;
pub mod list;

pub fn dispatch(cli: Cli) -> Result<(), String> {
    if cli.list_entities {
        list::run()
    } else {
        import::run(cli.import)
    }
}
