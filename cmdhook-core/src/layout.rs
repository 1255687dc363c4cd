//! Fixed file layout of an installed package

use std::path::{Path, PathBuf};

/// Directory holding the prebuilt binaries shipped with the package
const DIST_DIR: &str = "dist";
/// Prebuilt Windows executable inside [`DIST_DIR`]
const WINDOWS_BINARY: &str = "windows.exe";
/// Directory the package manager links commands from
const BIN_DIR: &str = "bin";
/// Installed command name inside [`BIN_DIR`]
const COMMAND_BINARY: &str = "cmd.exe";

/// Source and destination of the install copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    source: PathBuf,
    destination: PathBuf,
}

impl InstallPaths {
    /// Resolves the path pair relative to the package's base directory
    pub fn from_base(base_dir: &Path) -> Self {
        Self {
            source: base_dir.join(DIST_DIR).join(WINDOWS_BINARY),
            destination: base_dir.join(BIN_DIR).join(COMMAND_BINARY),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
