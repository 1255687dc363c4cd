use log::{debug, info, warn};
use std::fs;
use std::io::Write;

use crate::error::{InstallError, Result};
use crate::layout::InstallPaths;
use crate::platform::Platform;

/// Line printed once the command is in place
pub const SUCCESS_MESSAGE: &str = "CLI installed successfully";

/// What a hook run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Host is not Windows, nothing was touched
    NotApplicable,
    /// Dry run on Windows, nothing was touched
    DryRun,
    /// Binary copied to the destination
    Installed { bytes: u64 },
}

/// One-shot post-install step that places the bundled Windows binary in `bin/`
#[derive(Debug, Clone)]
pub struct InstallHook {
    platform: Platform,
    paths: InstallPaths,
    dry_run: bool,
}

impl InstallHook {
    pub fn new(platform: Platform, paths: InstallPaths) -> Self {
        Self {
            platform,
            paths,
            dry_run: false,
        }
    }

    /// Preview the copy without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn paths(&self) -> &InstallPaths {
        &self.paths
    }

    /// Runs the hook, printing the success message to stdout
    pub fn run(&self) -> Result<InstallOutcome> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.run_with_output(&mut handle)
    }

    /// Runs the hook, writing the success message to `out`.
    ///
    /// The copy is attempted exactly once. The destination directory must
    /// already exist; an existing destination file is overwritten.
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<InstallOutcome> {
        if !self.platform.is_windows_family() {
            debug!("Platform {} needs no install step", self.platform);
            return Ok(InstallOutcome::NotApplicable);
        }

        let source = self.paths.source();
        let destination = self.paths.destination();

        if self.dry_run {
            info!("[DRY RUN] {} -> {}", source.display(), destination.display());
            return Ok(InstallOutcome::DryRun);
        }

        debug!("Copying {} -> {}", source.display(), destination.display());
        let bytes = fs::copy(source, destination).map_err(|e| InstallError::CopyFailure {
            source_path: source.to_path_buf(),
            destination: destination.to_path_buf(),
            source: e,
        })?;

        debug!("Installed {} ({} bytes)", destination.display(), bytes);

        if let Err(e) = writeln!(out, "{}", SUCCESS_MESSAGE) {
            warn!("Failed to report install success: {}", e);
        }

        Ok(InstallOutcome::Installed { bytes })
    }
}
