//! Calculator front end.
//!
//! A line-oriented stand-in for a calculator keypad. Each whitespace-separated
//! token on a line is one key press:
//! - digits and `.` build up the number in the display
//! - `⏎` (or `enter`) pushes the displayed number
//! - `C` (or `clear`) resets everything
//! - anything else is an operation symbol handed to the brain
//!
//! After every line the display (and the history label, if any) is printed.

mod app;
mod key;

pub use app::App;
pub use key::Key;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use calc_brain::{Brain, BrainConfig, ConfigError};
use log::debug;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: calc [OPTIONS]

Options:
  -c <CONFIG>  Load brain configuration from CONFIG (TOML)
  -e <KEYS>    Press KEYS and print the result
  -h, --help   Print this help message

If -e is not given, key lines are read from stdin.";

/// Errors that stop the front end.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub keys: Option<String>,
    pub help: bool,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Options, ReplError> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| ReplError::Usage(format!("-c needs a path\n\n{USAGE}")))?;
                options.config = Some(PathBuf::from(path));
            }
            "-e" => {
                let keys = iter
                    .next()
                    .ok_or_else(|| ReplError::Usage(format!("-e needs keys\n\n{USAGE}")))?;
                options.keys = Some(keys.clone());
            }
            other => {
                return Err(ReplError::Usage(format!(
                    "unexpected argument '{other}'\n\n{USAGE}"
                )));
            }
        }
    }
    Ok(options)
}

/// Run the front end with the given command-line arguments.
pub fn run(args: &[String]) -> Result<(), ReplError> {
    let options = parse_args(args)?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = match &options.config {
        Some(path) => BrainConfig::from_file(path)?,
        None => BrainConfig::default(),
    };
    debug!("configuration: {config:?}");
    let brain = Brain::with_config(&config).map_err(ConfigError::from)?;
    let mut app = App::new(brain);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &options.keys {
        Some(keys) => {
            app.press_line(keys);
            write_status(&mut out, &app)
        }
        None => drive(&mut app, io::stdin().lock(), &mut out),
    }
}

/// Feed key lines from `input` to `app`, printing the status after each.
pub fn drive(app: &mut App, input: impl BufRead, out: &mut impl Write) -> Result<(), ReplError> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        app.press_line(line);
        write_status(out, app)?;
    }
    Ok(())
}

fn write_status(out: &mut impl Write, app: &App) -> Result<(), ReplError> {
    writeln!(out, "{}", app.display())?;
    if !app.history().is_empty() {
        writeln!(out, "history: {}", app.history())?;
    }
    out.flush()?;
    Ok(())
}
