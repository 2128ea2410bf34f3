mod cli;

use std::process::ExitCode;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() -> ExitCode {
    match CliCommand::run_from_args().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("icc-locate error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
