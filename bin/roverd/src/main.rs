#![deny(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use daemon::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);
    let config = args.into_runtime_config();

    if let Err(error) = daemon::serve(config) {
        tracing::error!(%error, "accept loop terminated");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
