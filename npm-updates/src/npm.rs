//! Thin wrapper around the `npm` executable

use anyhow::{bail, Context, Result};
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::outdated::OutdatedDependency;

/// Runs npm commands in the current working directory
pub struct Npm {
    program: PathBuf,
}

impl Npm {
    /// Resolves `npm` on PATH (`npm.cmd` on Windows)
    pub fn locate() -> Self {
        let program = which::which("npm").unwrap_or_else(|_| PathBuf::from("npm"));
        Self::with_program(program)
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Raw `npm outdated --json --long` output
    pub fn outdated(&self) -> Result<Vec<u8>> {
        self.run("outdated", outdated_args())
    }

    pub fn uninstall(&self, dependency: &OutdatedDependency) -> Result<()> {
        self.run("uninstall", uninstall_args(dependency))?;
        Ok(())
    }

    pub fn install_latest(&self, dependency: &OutdatedDependency) -> Result<()> {
        self.run("install", install_args(dependency))?;
        Ok(())
    }

    /// Runs npm and returns its stdout.
    ///
    /// A non-zero exit only counts as failure when nothing was written to stdout:
    /// `npm outdated` exits 1 whenever it finds outdated packages.
    fn run(&self, command: &str, args: Vec<OsString>) -> Result<Vec<u8>> {
        debug!("Running {} {:?}", self.program.display(), args);

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        if !output.status.success() && output.stdout.is_empty() {
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            bail!(
                "npm {} command failed with exit code {}\nnpm {} command output: {}",
                command,
                code,
                command,
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        Ok(output.stdout)
    }
}

fn outdated_args() -> Vec<OsString> {
    vec!["outdated".into(), "--json".into(), "--long".into()]
}

fn uninstall_args(dependency: &OutdatedDependency) -> Vec<OsString> {
    vec![
        "uninstall".into(),
        dependency.name.clone().into(),
        "--force".into(),
    ]
}

fn install_args(dependency: &OutdatedDependency) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["install".into(), dependency.install_spec().into()];
    if let Some(flag) = dependency.save_flag() {
        args.push(flag.into());
    }
    args.push("--force".into());
    args
}
