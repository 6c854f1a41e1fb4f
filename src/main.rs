use square_solver::cli;
use square_solver::commands::run_session;
use square_solver::config::RunConfig;
use square_solver::errors::{exit_code, exit_code_for};
use square_solver::observability::install_panic_hook;
use std::process::ExitCode;

// Main orchestrator function
fn main() -> ExitCode {
    let args = cli::parse_args();
    let config = RunConfig::from_cli(&args);

    cli::init_logging(config.verbosity);
    install_panic_hook();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run_session(&config, stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::from(exit_code::SUCCESS),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}
