use artx_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the state dir if possible, stderr otherwise.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("artx error: {:#}", err);
        std::process::exit(1);
    }
}
