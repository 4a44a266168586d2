use std::process::ExitCode;

use clap::Parser;
use fivehand::{run, shared::init_tracing, AppError, Config};
use tracing::error;

fn main() -> ExitCode {
    init_tracing();
    let config = Config::parse();

    match run(&config) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(AppError::DuplicateCard { card, report }) => {
            println!("{}", report);
            error!(card = %card, "Session aborted");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "Session failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
