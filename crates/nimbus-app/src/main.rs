//! The `nimbus` binary: render the sky described by the config and CLI flags.

use std::process::ExitCode;

use clap::Parser;
use nimbus_config::CliArgs;
use tracing::error;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match nimbus_app::run_cli(&args) {
        Ok(paths) => {
            for path in &paths {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("nimbus: {e}");
            ExitCode::FAILURE
        }
    }
}
