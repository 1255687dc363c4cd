use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One package entry as reported by `npm outdated --json --long`
#[derive(Debug, Clone, Default, Deserialize)]
struct OutdatedEntry {
    #[serde(default)]
    current: String,
    #[serde(default)]
    wanted: String,
    #[serde(default)]
    latest: String,
    #[serde(default)]
    location: String,
    #[serde(default, rename = "type")]
    kind: String,
}

/// Outdated dependency with the id the user selects it by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdatedDependency {
    pub id: usize,
    pub name: String,
    pub current: String,
    pub wanted: String,
    pub latest: String,
    pub location: String,
    /// `dependencies` or `devDependencies`
    #[serde(rename = "type")]
    pub kind: String,
}

impl OutdatedDependency {
    /// `npm install` flag that keeps the package in the same section of package.json
    pub fn save_flag(&self) -> Option<&'static str> {
        match self.kind.as_str() {
            "devDependencies" => Some("--save-dev"),
            "dependencies" => Some("--save"),
            _ => None,
        }
    }

    /// `name@latest` install spec
    pub fn install_spec(&self) -> String {
        format!("{}@{}", self.name, self.latest)
    }
}

/// Parses `npm outdated --json --long` output into a list sorted by package name.
///
/// Ids are assigned in that order, starting at 0. Empty output means nothing is outdated.
pub fn parse_outdated(raw: &[u8]) -> Result<Vec<OutdatedDependency>> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let entries: BTreeMap<String, OutdatedEntry> =
        serde_json::from_slice(raw).context("Failed to parse npm outdated output")?;

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(id, (name, entry))| OutdatedDependency {
            id,
            name,
            current: entry.current,
            wanted: entry.wanted,
            latest: entry.latest,
            location: entry.location,
            kind: entry.kind,
        })
        .collect())
}

/// Renders the numbered `[NN] name (current => latest)` listing
pub fn format_listing(dependencies: &[OutdatedDependency]) -> String {
    let mut listing = String::new();
    for (index, dep) in dependencies.iter().enumerate() {
        listing.push_str(&format!(
            "[{:02}] {} ({} => {})\n",
            index, dep.name, dep.current, dep.latest
        ));
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    const NPM_OUTPUT: &str = r#"{
      "typescript": {
        "current": "5.1.6",
        "wanted": "5.1.6",
        "latest": "5.4.2",
        "dependent": "app",
        "location": "node_modules/typescript",
        "type": "devDependencies",
        "homepage": "https://www.typescriptlang.org/"
      },
      "express": {
        "current": "4.17.1",
        "wanted": "4.18.2",
        "latest": "4.18.2",
        "dependent": "app",
        "location": "node_modules/express",
        "type": "dependencies"
      },
      "chalk": {
        "wanted": "5.3.0",
        "latest": "5.3.0",
        "dependent": "app",
        "location": "",
        "type": "dependencies"
      }
    }"#;

    #[test]
    fn test_parse_sorts_by_name_and_numbers() -> Result<()> {
        let deps = parse_outdated(NPM_OUTPUT.as_bytes())?;

        let names: Vec<&str> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["chalk", "express", "typescript"]);
        let ids: Vec<usize> = deps.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        assert_eq!(deps[1].current, "4.17.1");
        assert_eq!(deps[1].latest, "4.18.2");
        assert_eq!(deps[2].kind, "devDependencies");
        // Not installed yet: npm omits "current"
        assert_eq!(deps[0].current, "");

        Ok(())
    }

    #[test]
    fn test_parse_empty_output() -> Result<()> {
        assert!(parse_outdated(b"")?.is_empty());
        assert!(parse_outdated(b"  \n")?.is_empty());
        assert!(parse_outdated(b"{}")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_outdated(b"npm ERR! code ENOENT").is_err());
    }

    #[test]
    fn test_listing_pads_first_ten_ids() -> Result<()> {
        let mut json = String::from("{");
        for i in 0..11 {
            if i > 0 {
                json.push(',');
            }
            json.push_str(&format!(
                r#""pkg-{:02}": {{"current": "1.0.{}", "wanted": "1.0.{}", "latest": "2.0.0", "location": "", "type": "dependencies"}}"#,
                i, i, i
            ));
        }
        json.push('}');

        let listing = format_listing(&parse_outdated(json.as_bytes())?);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "[00] pkg-00 (1.0.0 => 2.0.0)");
        assert_eq!(lines[9], "[09] pkg-09 (1.0.9 => 2.0.0)");
        assert_eq!(lines[10], "[10] pkg-10 (1.0.10 => 2.0.0)");

        Ok(())
    }

    #[test]
    fn test_save_flag_follows_dependency_type() -> Result<()> {
        let deps = parse_outdated(NPM_OUTPUT.as_bytes())?;

        assert_eq!(deps[1].save_flag(), Some("--save"));
        assert_eq!(deps[2].save_flag(), Some("--save-dev"));
        assert_eq!(deps[2].install_spec(), "typescript@5.4.2");

        let mut optional = deps[1].clone();
        optional.kind = "optionalDependencies".to_string();
        assert_eq!(optional.save_flag(), None);

        Ok(())
    }
}
