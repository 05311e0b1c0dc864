mod platform;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = platform::Cli::parse();
    match platform::run_app(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ythub_app: {err}");
            ExitCode::FAILURE
        }
    }
}
