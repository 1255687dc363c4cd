use anyhow::{Context, Result};
use cmdhook_core::{InstallConfig, InstallOutcome, Platform};

mod cli;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Initialize logger with appropriate level based on verbose flag
    if std::env::var("RUST_LOG").is_err() {
        if args.verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    // A copy failure is fatal: returning it exits non-zero and aborts the package install
    run(args)
}

fn run(args: cli::Args) -> Result<()> {
    let base_dir = match args.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine package directory")?,
    };

    let platform = args
        .platform
        .as_deref()
        .map(Platform::from_identifier)
        .unwrap_or_else(Platform::detect);

    let config = InstallConfig {
        base_dir,
        platform,
        dry_run: args.dry_run,
    };

    log::debug!(
        "Running install hook for {} in {}",
        config.platform,
        config.base_dir.display()
    );

    match cmdhook_core::install(&config).context("Installation failed")? {
        InstallOutcome::NotApplicable => {
            log::debug!("Nothing to install on {}", config.platform);
        }
        InstallOutcome::DryRun => {
            log::info!("[DRY RUN] No files were copied");
        }
        InstallOutcome::Installed { .. } => {}
    }

    Ok(())
}
