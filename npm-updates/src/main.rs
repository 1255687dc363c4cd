use anyhow::{Context, Result};
use std::io::Write;

mod cli;
mod commands;
mod npm;
mod outdated;
mod selection;
mod snapshot;

use cli::Mode;
use npm::Npm;
use snapshot::UpdatesFile;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Initialize logger with appropriate level based on verbose flag
    if std::env::var("RUST_LOG").is_err() {
        if args.verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "warn");
        }
    }
    env_logger::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.mode() {
        Mode::MissingFlag => {
            writeln!(out, "WARNING: One of the arguments must be specified (--check or --update)")?;
        }
        Mode::ConflictingFlags => {
            writeln!(out, "WARNING: Only one argument can be specified (--check or --update)")?;
        }
        Mode::Check => {
            let updates = UpdatesFile::in_dir(&working_dir()?);
            commands::check(&Npm::locate(), &updates, &mut out)?;
        }
        Mode::Update(ids) => {
            let updates = UpdatesFile::in_dir(&working_dir()?);
            commands::update(&Npm::locate(), &updates, &ids, &mut out)?;
        }
    }

    Ok(())
}

fn working_dir() -> Result<std::path::PathBuf> {
    std::env::current_dir().context("Failed to determine working directory")
}
