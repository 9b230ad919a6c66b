use std::process::ExitCode;

use tracing::error;

mod cli;
mod config;
mod cover;
mod library;
mod modfiles;
mod pipeline;
mod runtime;
mod transcode;

fn main() -> ExitCode {
    runtime::init_logging();

    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
