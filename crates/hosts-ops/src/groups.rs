//! Hostgroup create, edit, remove, show, list and (de)activate.

use std::fmt;

use hosts_core::check_body;
use hosts_store::{GroupStore, HostsGroup};

use crate::editor::Editor;
use crate::error::{Error, Result};

/// What a create or edit did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupChange {
    Created,
    Updated,
    /// The body was emptied during an edit, so the group was deleted.
    Removed,
    Unchanged,
    /// The editor returned nothing for a new group.
    Cancelled,
}

/// One row of `list` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub name: String,
    pub active: bool,
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.active { "active" } else { "inactive" };
        write!(f, "{}\t{}", self.name, status)
    }
}

fn validated(name: &str, body: String) -> Result<String> {
    match check_body(&body) {
        Ok(()) => Ok(body),
        Err(source) => Err(Error::InvalidGroup {
            name: name.to_string(),
            draft: body,
            source,
        }),
    }
}

fn ensure_exist<S: AsRef<str>>(store: &GroupStore, names: &[S]) -> Result<()> {
    let missing: Vec<String> = names
        .iter()
        .filter(|n| !store.exists(n.as_ref()))
        .map(|n| n.as_ref().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::GroupsNotFound { names: missing })
    }
}

/// Create a group from an empty editor buffer.
pub fn new_group(store: &mut GroupStore, name: &str, editor: &dyn Editor) -> Result<GroupChange> {
    new_group_from(store, name, editor, "")
}

/// Create a group, starting the editor from `draft`.
///
/// An empty result cancels. A group with the same name is replaced and the
/// new one starts inactive.
pub fn new_group_from(
    store: &mut GroupStore,
    name: &str,
    editor: &dyn Editor,
    draft: &str,
) -> Result<GroupChange> {
    let body = editor.edit(draft)?;
    if body.is_empty() {
        tracing::info!(name, "Empty body, group not created");
        return Ok(GroupChange::Cancelled);
    }

    let body = validated(name, body)?;
    if store.exists(name) {
        tracing::warn!(name, "Replacing existing group");
    }
    store.upsert(HostsGroup::new(name, body));
    tracing::info!(name, "Created group");
    Ok(GroupChange::Created)
}

/// Edit an existing group's body.
pub fn edit_group(store: &mut GroupStore, name: &str, editor: &dyn Editor) -> Result<GroupChange> {
    let body = store.require(name)?.body.clone();
    edit_group_from(store, name, editor, &body)
}

/// Edit an existing group, starting the editor from `draft`.
///
/// Returning the stored body unchanged is a no-op and emptying it removes the
/// group. The active flag is kept.
pub fn edit_group_from(
    store: &mut GroupStore,
    name: &str,
    editor: &dyn Editor,
    draft: &str,
) -> Result<GroupChange> {
    let mut group = store.require(name)?.clone();
    let body = editor.edit(draft)?;

    if body == group.body {
        tracing::debug!(name, "Group body unchanged");
        return Ok(GroupChange::Unchanged);
    }
    if body.is_empty() {
        store.remove(name);
        tracing::info!(name, "Empty body, removed group");
        return Ok(GroupChange::Removed);
    }

    group.body = validated(name, body)?;
    store.upsert(group);
    tracing::info!(name, "Updated group");
    Ok(GroupChange::Updated)
}

/// Remove every named group. Nothing is removed if any name is unknown.
pub fn remove_groups<S: AsRef<str>>(store: &mut GroupStore, names: &[S]) -> Result<()> {
    ensure_exist(store, names)?;
    for name in names {
        store.remove(name.as_ref());
        tracing::info!(name = name.as_ref(), "Removed group");
    }
    Ok(())
}

fn set_active<S: AsRef<str>>(store: &mut GroupStore, names: &[S], active: bool) -> Result<()> {
    ensure_exist(store, names)?;
    for name in names {
        store.set_active(name.as_ref(), active)?;
        tracing::info!(name = name.as_ref(), active, "Set group state");
    }
    Ok(())
}

/// Activate every named group. Nothing changes if any name is unknown.
pub fn activate_groups<S: AsRef<str>>(store: &mut GroupStore, names: &[S]) -> Result<()> {
    set_active(store, names, true)
}

/// Deactivate every named group. Nothing changes if any name is unknown.
pub fn deactivate_groups<S: AsRef<str>>(store: &mut GroupStore, names: &[S]) -> Result<()> {
    set_active(store, names, false)
}

/// Concatenated bodies of the named groups, or of all active groups when
/// `names` is empty.
pub fn show_groups<S: AsRef<str>>(store: &GroupStore, names: &[S]) -> Result<String> {
    ensure_exist(store, names)?;

    if names.is_empty() {
        return Ok(store.active().map(|g| g.body.as_str()).collect());
    }

    let mut out = String::new();
    for name in names {
        out.push_str(&store.require(name.as_ref())?.body);
    }
    Ok(out)
}

/// Every group with its state, in store order.
pub fn list_groups(store: &GroupStore) -> Vec<GroupSummary> {
    store
        .list()
        .iter()
        .map(|g| GroupSummary {
            name: g.name.clone(),
            active: g.is_active,
        })
        .collect()
}
