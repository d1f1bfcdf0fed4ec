//! Calculator keypad on the command line.
//!
//! Usage:
//!   calc                 Read key lines from stdin
//!   calc -e "<keys>"     Press keys and print the display
//!   calc -c calc.toml    Load a brain configuration

use std::{env, process::ExitCode};

use env_logger::Env;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match calc_repl::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
