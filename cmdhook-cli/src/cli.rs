use clap::Parser;
use std::path::PathBuf;

/// Post-install hook that places the bundled Windows binary on the command path
#[derive(Parser, Debug)]
#[command(name = "cmdhook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Copies dist/windows.exe to bin/cmd.exe on Windows hosts", long_about = None)]
pub struct Args {
    /// Package directory containing dist/ and bin/ (defaults to the current directory)
    #[arg(long = "base-dir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Act as if running on this platform (e.g. win32, linux, darwin)
    #[arg(long = "platform", value_name = "ID")]
    pub platform: Option<String>,

    /// Run in dry-run mode (preview the copy without writing)
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["cmdhook"]).unwrap();
        assert!(args.base_dir.is_none());
        assert!(args.platform.is_none());
        assert!(!args.dry_run);
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "cmdhook",
            "--base-dir",
            "node_modules/tool",
            "--platform",
            "win32",
            "-n",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.base_dir, Some(PathBuf::from("node_modules/tool")));
        assert_eq!(args.platform.as_deref(), Some("win32"));
        assert!(args.dry_run);
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_positional() {
        assert!(Args::try_parse_from(["cmdhook", "extra"]).is_err());
    }
}
