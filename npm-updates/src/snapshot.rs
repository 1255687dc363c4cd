//! Persisted result of the last `--check`, read back by `--update`

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::outdated::OutdatedDependency;

/// File the numbered listing is saved to, in the working directory
pub const UPDATES_FILE_NAME: &str = "package-updates.json";

/// Saved listing of outdated dependencies
pub struct UpdatesFile {
    path: PathBuf,
}

impl UpdatesFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `package-updates.json` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(UPDATES_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, dependencies: &[OutdatedDependency]) -> Result<()> {
        let data = serde_json::to_string_pretty(dependencies)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<OutdatedDependency>> {
        let data = fs::read_to_string(&self.path).with_context(|| {
            format!(
                "Failed to read {}. Run with --check first.",
                self.path.display()
            )
        })?;
        let dependencies = serde_json::from_str(&data)
            .with_context(|| format!("Invalid update list in {}", self.path.display()))?;
        Ok(dependencies)
    }

    pub fn remove(&self) -> Result<()> {
        fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove {}", self.path.display()))
    }
}
