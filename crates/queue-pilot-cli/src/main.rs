use queue_pilot_cli::run_cli;
use tracing::error;

#[tokio::main]
async fn main() {
    // Run CLI and handle errors
    if let Err(e) = run_cli().await {
        error!("CLI error: {}", e);

        // Exit with appropriate code based on error type
        let exit_code = match e {
            queue_pilot_cli::CliError::Configuration(_) => 1,
            queue_pilot_cli::CliError::Service(_) => 2,
            queue_pilot_cli::CliError::Demo(_) => 3,
            queue_pilot_cli::CliError::InvalidArgument { .. } => 4,
            queue_pilot_cli::CliError::Io(_) => 5,
        };

        std::process::exit(exit_code);
    }
}
