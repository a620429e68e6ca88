//! In-memory hostgroup store backed by a JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::group::HostsGroup;
use crate::path::default_config_path;
use crate::{Error, Result, io};

/// On-disk layout: `{"Groups": [...]}`.
#[derive(Debug, Default, Deserialize)]
struct StoreFile {
    #[serde(rename = "Groups", default)]
    groups: Option<Vec<HostsGroup>>,
}

#[derive(Serialize)]
struct StoreFileRef<'a> {
    #[serde(rename = "Groups")]
    groups: &'a [HostsGroup],
}

/// Ordered collection of hostgroups, unique by name.
///
/// Groups keep insertion order; replacing a group keeps its position.
/// Mutations mark the store dirty so callers can skip saving untouched stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStore {
    path: PathBuf,
    groups: Vec<HostsGroup>,
    dirty: bool,
}

impl GroupStore {
    /// An empty store that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            groups: Vec::new(),
            dirty: false,
        }
    }

    /// Load the store at `path`, or at the default location when `None`.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::load(&default_config_path()?),
        }
    }

    /// Load the store from `path`.
    ///
    /// A missing file gives an empty store bound to `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "No group store found, starting empty");
            return Ok(Self::new(path));
        }

        let content = io::read_text(path)?;
        let file: StoreFile = serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let groups = file.groups.unwrap_or_default();
        tracing::debug!(?path, groups = groups.len(), "Loaded group store");

        Ok(Self {
            path: path.to_path_buf(),
            groups,
            dirty: false,
        })
    }

    /// Write the store to its path.
    pub fn save(&mut self) -> Result<()> {
        let content = serde_json::to_string_pretty(&StoreFileRef {
            groups: &self.groups,
        })
        .map_err(|e| Error::ConfigSerialize {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        io::write_atomic(&self.path, content.as_bytes())?;
        tracing::debug!(path = ?self.path, groups = self.groups.len(), "Saved group store");
        self.dirty = false;
        Ok(())
    }

    /// Save only when something changed since load or the last save.
    pub fn save_if_dirty(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&HostsGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Like [`GroupStore::get`], failing with [`Error::GroupNotFound`].
    pub fn require(&self, name: &str) -> Result<&HostsGroup> {
        self.get(name).ok_or_else(|| Error::GroupNotFound {
            name: name.to_string(),
        })
    }

    /// Insert `group`, replacing any group with the same name in place.
    pub fn upsert(&mut self, group: HostsGroup) {
        match self.groups.iter_mut().find(|g| g.name == group.name) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
        self.dirty = true;
    }

    /// Remove the group called `name`, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<HostsGroup> {
        let idx = self.groups.iter().position(|g| g.name == name)?;
        self.dirty = true;
        Some(self.groups.remove(idx))
    }

    /// Set the active flag of the group called `name`.
    pub fn set_active(&mut self, name: &str, active: bool) -> Result<()> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| Error::GroupNotFound {
                name: name.to_string(),
            })?;
        if group.is_active != active {
            group.is_active = active;
            self.dirty = true;
        }
        Ok(())
    }

    /// All groups in store order.
    pub fn list(&self) -> &[HostsGroup] {
        &self.groups
    }

    /// Active groups in store order.
    pub fn active(&self) -> impl Iterator<Item = &HostsGroup> {
        self.groups.iter().filter(|g| g.is_active)
    }
}
