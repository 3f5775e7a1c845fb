#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod logger;

use clap::Parser;
use std::process::ExitCode;
use syncfifo_lib::config;
use syncfifo_lib::run;

fn main() -> ExitCode {
    let config = match config::RawConfig::parse().clean() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logger::init(config.log_level);

    match run::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
