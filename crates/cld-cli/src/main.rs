use cld_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; stderr when the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {err:#}");
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("cld error: {:#}", err);
        std::process::exit(1);
    }
}
