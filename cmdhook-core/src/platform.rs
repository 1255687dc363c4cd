use std::fmt;

/// Operating system family of the host running the hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Other(String),
}

impl Platform {
    /// Detects the platform this binary was built for
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Parses a platform identifier.
    ///
    /// Accepts Rust target names (`windows`, `macos`) as well as the
    /// identifiers package managers report (`win32`, `darwin`).
    pub fn from_identifier(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "windows" | "win32" => Platform::Windows,
            "linux" => Platform::Linux,
            "macos" | "darwin" => Platform::MacOs,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Other(name) => name,
        }
    }

    pub fn is_windows_family(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_identifiers() {
        assert_eq!(Platform::from_identifier("win32"), Platform::Windows);
        assert_eq!(Platform::from_identifier("windows"), Platform::Windows);
        assert_eq!(Platform::from_identifier("WIN32"), Platform::Windows);
        assert!(Platform::from_identifier(" Windows ").is_windows_family());
    }

    #[test]
    fn test_non_windows_identifiers() {
        assert_eq!(Platform::from_identifier("darwin"), Platform::MacOs);
        assert_eq!(Platform::from_identifier("macos"), Platform::MacOs);
        assert_eq!(Platform::from_identifier("linux"), Platform::Linux);

        for id in ["linux", "darwin", "freebsd", "openbsd", "sunos", "aix", "android"] {
            assert!(
                !Platform::from_identifier(id).is_windows_family(),
                "{} should not be treated as windows",
                id
            );
        }
    }

    #[test]
    fn test_unknown_identifier_keeps_name() {
        let platform = Platform::from_identifier("FreeBSD");
        assert_eq!(platform, Platform::Other("freebsd".to_string()));
        assert_eq!(platform.to_string(), "freebsd");
    }

    #[test]
    fn test_detect_matches_build_target() {
        assert_eq!(Platform::detect().is_windows_family(), cfg!(windows));
    }
}
