//! # textcount
//!
//! A CLI tool for counting text lines and characters across a directory tree.
//!
//! ## Overview
//!
//! textcount is built on top of textcountlib. It walks a folder, skips the
//! files matched by the folder's `.gitignore` or ending with one of the
//! `--skipped` suffixes, and prints three totals:
//!
//! ```text
//! lines	<N>
//! chars	<N>
//! files	<N>
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Count the current directory
//! textcount
//!
//! # Count another folder, skipping lock files instead of go.mod/go.sum
//! textcount --folder ../project --skipped Cargo.lock,package-lock.json
//!
//! # Count without reading .gitignore
//! textcount --folder /tmp/scratch --no-ignore
//! ```

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use textcountlib::{count_directory, CountOptions, DEFAULT_SKIPPED};
use tracing::{error, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("textcount")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count text lines and characters in a folder, honoring .gitignore")
        .arg(
            Arg::new("folder")
                .long("folder")
                .default_value("./")
                .help("The folder to count"),
        )
        .arg(
            Arg::new("skipped")
                .long("skipped")
                .value_delimiter(',')
                .default_values(DEFAULT_SKIPPED.iter().copied())
                .help("Comma separated list of file suffixes to skip counting"),
        )
        .arg(
            Arg::new("no-ignore")
                .long("no-ignore")
                .action(ArgAction::SetTrue)
                .help("Don't read <folder>/.gitignore"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .help("Log every skipped and counted file"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only log fatal errors"),
        )
}

/// Install the stderr logger at the level picked by the verbosity flags
fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else if matches.get_flag("quiet") {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .with(EnvFilter::new(level.as_str()))
        .init();
}

/// Fold the parsed arguments into count options
fn build_options(matches: &ArgMatches) -> CountOptions {
    let root = matches
        .get_one::<String>("folder")
        .map(String::as_str)
        .unwrap_or("./");
    let skip_list: Vec<String> = matches
        .get_many::<String>("skipped")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    CountOptions::new()
        .root(root)
        .skip_list(skip_list)
        .use_ignore(!matches.get_flag("no-ignore"))
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let options = build_options(matches);
    let result = count_directory(&options)
        .with_context(|| format!("counting '{}' failed", options.root.display()))?;

    print!("{}", result.summary());
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(&matches);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
