//! Error types for the install hook.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the package installation.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Copying the bundled binary failed (missing source, missing or
    /// unwritable destination directory, permissions, disk full).
    #[error("failed to copy {} to {}: {source}", .source_path.display(), .destination.display())]
    CopyFailure {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for install operations.
pub type Result<T> = std::result::Result<T, InstallError>;
