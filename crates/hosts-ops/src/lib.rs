//! Hostgroup operations for hosts-manager
//!
//! Every operation takes the [`GroupStore`] explicitly and returns what it did,
//! leaving printing and saving to the caller. Editing and diffing go through the
//! [`Editor`] and [`Differ`] capabilities so tests can substitute fakes.

pub mod apply;
pub mod diff;
pub mod editor;
pub mod error;
pub mod groups;

pub use apply::{ApplyReport, DEFAULT_HOSTS_FILE, apply_groups, render_hosts};
pub use diff::{Differ, UnifiedDiffer};
pub use editor::{Editor, ExternalEditor, ScriptedEditor};
pub use error::{Error, Result};
pub use groups::{
    GroupChange, GroupSummary, activate_groups, deactivate_groups, edit_group, edit_group_from,
    list_groups, new_group, new_group_from, remove_groups, show_groups,
};

pub use hosts_store::{GroupStore, HostsGroup};
