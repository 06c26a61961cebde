use authnorm_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; stdout stays reserved for output.
    if let Err(err) = logging::init_logging() {
        eprintln!("authnorm: {err:#}");
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("authnorm error: {:#}", err);
        std::process::exit(1);
    }
}
