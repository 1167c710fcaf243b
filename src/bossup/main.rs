use std::process::ExitCode;

use clap::Parser;
use cli::{UploadArgs, handle_upload};
use tracing::error;

mod cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = UploadArgs::parse();

    match handle_upload(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
