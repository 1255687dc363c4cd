use anyhow::Result;
use log::info;
use std::io::Write;

use crate::npm::Npm;
use crate::outdated;
use crate::selection;
use crate::snapshot::UpdatesFile;

/// Lists outdated dependencies and saves the numbered listing for `--update`.
///
/// Returns how many dependencies are outdated.
pub fn check<W: Write>(npm: &Npm, updates: &UpdatesFile, out: &mut W) -> Result<usize> {
    writeln!(out, "Checking for updates...")?;
    writeln!(out)?;

    let raw = npm.outdated()?;
    let dependencies = outdated::parse_outdated(&raw)?;

    if dependencies.is_empty() {
        writeln!(out, "No dependencies to update found")?;
        return Ok(0);
    }

    writeln!(out, "{} dependencies to update found", dependencies.len())?;
    writeln!(out, "To update, run the following command:")?;
    writeln!(out, "npm-updates --update [dependency-id]")?;
    writeln!(out)?;
    write!(out, "{}", outdated::format_listing(&dependencies))?;
    writeln!(out)?;

    updates.save(&dependencies)?;
    info!("Saved update list to {}", updates.path().display());

    Ok(dependencies.len())
}

/// Reinstalls the selected dependencies at their latest version, then drops the saved listing.
///
/// Ids are validated before anything is uninstalled. The first npm failure aborts the run.
pub fn update<W: Write>(npm: &Npm, updates: &UpdatesFile, raw_ids: &str, out: &mut W) -> Result<()> {
    let ids = selection::parse_ids(raw_ids)?;

    writeln!(out, "Updating...")?;
    writeln!(out)?;

    let dependencies = updates.load()?;
    let selected = selection::select(&dependencies, &ids)?;

    for dependency in selected {
        writeln!(
            out,
            "Updating '{}' from {} to {}",
            dependency.name, dependency.current, dependency.latest
        )?;
        npm.uninstall(dependency)?;
        npm.install_latest(dependency)?;
        writeln!(out, "Dependency '{}' updated successfully", dependency.name)?;
        writeln!(out)?;
    }

    updates.remove()?;
    writeln!(out, "Done!")?;

    Ok(())
}
