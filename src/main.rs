use clap::Parser;
use deptsat::cli::{execute_command, get_log_level, prepare, Cli};
use deptsat::error::AnalysisError;
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    // Resolve config first so a configured log level can take effect
    let prepared = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| prepare(command, &cwd));
    let configured_level = prepared
        .as_ref()
        .ok()
        .and_then(|prepared| prepared.log_level());

    let log_level = get_log_level(cli.verbose, configured_level);

    tracing_subscriber::fmt()
        .with_env_filter(log_level.as_str())
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("deptsat started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = prepared.and_then(execute_command);

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        let analysis_error = e
            .chain()
            .find_map(|cause| cause.downcast_ref::<AnalysisError>());
        match analysis_error {
            Some(err) => {
                eprintln!("Error: {}", err.user_message());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
