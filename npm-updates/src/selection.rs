use anyhow::{bail, Context, Result};
use regex::Regex;

use crate::outdated::OutdatedDependency;

lazy_static::lazy_static! {
    static ref ID_LIST: Regex = Regex::new(r"^(\d+,)*\d+$").expect("valid id list pattern");
}

/// Parses a comma separated id list such as `1, 2,3`. Spaces are ignored.
pub fn parse_ids(raw: &str) -> Result<Vec<usize>> {
    let compact = raw.replace(' ', "");

    if !ID_LIST.is_match(&compact) {
        bail!("The update string must be a comma separated list of IDs (e.g. 1,2,3)");
    }

    compact
        .split(',')
        .map(|id| {
            id.parse::<usize>()
                .with_context(|| format!("Invalid dependency id: {}", id))
        })
        .collect()
}

/// Looks up the selected ids in the saved listing, keeping the order they were given in
pub fn select<'a>(
    dependencies: &'a [OutdatedDependency],
    ids: &[usize],
) -> Result<Vec<&'a OutdatedDependency>> {
    ids.iter()
        .map(|&id| {
            dependencies.get(id).with_context(|| {
                format!(
                    "No dependency with id {} (valid ids: 0-{})",
                    id,
                    dependencies.len().saturating_sub(1)
                )
            })
        })
        .collect()
}
