use std::path::PathBuf;

// Internal modules (private)
mod error;
mod installer;
mod layout;
mod platform;

// Re-export public types
pub use error::{InstallError, Result};
pub use installer::{InstallHook, InstallOutcome, SUCCESS_MESSAGE};
pub use layout::InstallPaths;
pub use platform::Platform;

/// Configuration options for a hook run
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Package root that holds `dist/` and `bin/`
    pub base_dir: PathBuf,
    /// Platform to act for (defaults to the detected host)
    pub platform: Platform,
    /// Preview the copy without writing anything
    pub dry_run: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            platform: Platform::detect(),
            dry_run: false,
        }
    }
}

impl InstallConfig {
    /// Build the hook described by this configuration
    pub fn hook(&self) -> InstallHook {
        InstallHook::new(self.platform.clone(), InstallPaths::from_base(&self.base_dir))
            .dry_run(self.dry_run)
    }
}

/// Run the install hook for the given configuration, reporting to stdout
pub fn install(config: &InstallConfig) -> Result<InstallOutcome> {
    config.hook().run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_targets_host() {
        let config = InstallConfig::default();
        assert_eq!(config.platform, Platform::detect());
        assert!(!config.dry_run);
        assert_eq!(
            config.hook().paths().destination(),
            PathBuf::from(".").join("bin").join("cmd.exe")
        );
    }

    #[test]
    fn test_install_noop_off_windows() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config = InstallConfig {
            base_dir: temp_dir.path().to_path_buf(),
            platform: Platform::Linux,
            dry_run: false,
        };

        assert_eq!(install(&config)?, InstallOutcome::NotApplicable);
        assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);

        Ok(())
    }
}
