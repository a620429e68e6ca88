//! Diff preview capability.

use similar::TextDiff;

/// Renders a human-readable preview of a change to a file.
pub trait Differ {
    /// Preview the change from `old` to `new` of the file called `label`.
    /// Returns an empty string when nothing changes.
    fn diff(&self, label: &str, old: &str, new: &str) -> String;
}

/// Unified diff, like `diff -u`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnifiedDiffer {
    pub context: usize,
}

impl Default for UnifiedDiffer {
    fn default() -> Self {
        Self { context: 3 }
    }
}

impl Differ for UnifiedDiffer {
    fn diff(&self, label: &str, old: &str, new: &str) -> String {
        if old == new {
            return String::new();
        }

        let new_label = format!("{} (hosts-manager)", label);
        TextDiff::from_lines(old, new)
            .unified_diff()
            .context_radius(self.context)
            .header(label, &new_label)
            .to_string()
    }
}
