//! Writing the active groups into a hosts file.

use std::path::{Path, PathBuf};

use hosts_core::merge_region;
use hosts_store::{GroupStore, io};

use crate::diff::Differ;
use crate::error::Result;

/// Hosts file used when none is given.
pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";

/// Outcome of [`apply_groups`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub path: PathBuf,
    /// Number of active groups written into the region.
    pub groups: usize,
    /// Preview from the [`Differ`]; empty when nothing changes.
    pub diff: String,
    pub changed: bool,
    pub written: bool,
}

/// The hosts file content with its managed region rebuilt from the store's
/// active groups.
pub fn render_hosts(store: &GroupStore, original: &str) -> Result<String> {
    Ok(merge_region(
        original,
        store.active().map(|g| g.body.as_str()),
    )?)
}

/// Merge the active groups into the hosts file at `hosts_path`.
///
/// With `dry_run` only the preview is produced. The file is left alone when
/// the merge fails or the content would not change.
pub fn apply_groups(
    store: &GroupStore,
    hosts_path: &Path,
    dry_run: bool,
    differ: &dyn Differ,
) -> Result<ApplyReport> {
    let original = io::read_text(hosts_path)?;
    let merged = render_hosts(store, &original)?;

    let label = hosts_path.display().to_string();
    let diff = differ.diff(&label, &original, &merged);
    let changed = merged != original;
    let groups = store.active().count();

    let written = if dry_run {
        tracing::info!(path = %label, changed, "[dry-run] Would update hosts file");
        false
    } else if changed {
        io::write_in_place(hosts_path, &merged)?;
        tracing::info!(path = %label, groups, "Updated hosts file");
        true
    } else {
        tracing::info!(path = %label, "Hosts file already up to date");
        false
    };

    Ok(ApplyReport {
        path: hosts_path.to_path_buf(),
        groups,
        diff,
        changed,
        written,
    })
}
