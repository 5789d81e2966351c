use std::process::ExitCode;

use clap::Parser;
use wordfreq::app;
use wordfreq::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    match app::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
