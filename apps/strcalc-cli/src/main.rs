use std::process::ExitCode;

use clap::Parser;
use strcalc_cli::cli::Cli;
use strcalc_cli::config::CliConfig;
use strcalc_cli::error::Status;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("strcalc: {e}");
            return Status::Failure.into();
        }
    };

    if let Err(e) = strcalc_cli::init_tracing(&config) {
        eprintln!("strcalc: {e}");
        return Status::Failure.into();
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    match strcalc_cli::run(&cli, &config, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => status.into(),
        Err(e) => {
            error!(error = %e, "strcalc failed");
            eprintln!("strcalc: {e}");
            Status::Failure.into()
        }
    }
}
