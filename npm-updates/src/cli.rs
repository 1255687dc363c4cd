use clap::Parser;

/// Lists outdated npm dependencies and upgrades the ones you pick
#[derive(Parser, Debug)]
#[command(name = "npm-updates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check for outdated npm dependencies and update them by id", long_about = None)]
pub struct Args {
    /// Check for updates
    #[arg(long = "check")]
    pub check: bool,

    /// Install updates (e.g. --update 1,2,3)
    #[arg(long = "update", value_name = "IDS")]
    pub update: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// What the invocation asked for
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Check,
    Update(String),
    /// Neither flag given
    MissingFlag,
    /// Both flags given
    ConflictingFlags,
}

impl Args {
    pub fn mode(&self) -> Mode {
        let update = self.update.as_deref().filter(|ids| !ids.is_empty());
        match (self.check, update) {
            (true, Some(_)) => Mode::ConflictingFlags,
            (true, None) => Mode::Check,
            (false, Some(ids)) => Mode::Update(ids.to_string()),
            (false, None) => Mode::MissingFlag,
        }
    }
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
