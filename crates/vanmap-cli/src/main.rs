use vanmap_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; if the state dir is
    // unwritable, log to stderr instead.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("vanmap error: {:#}", err);
        std::process::exit(1);
    }
}
