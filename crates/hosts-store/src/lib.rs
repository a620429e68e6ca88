//! Hostgroup persistence for hosts-manager
//!
//! Provides the in-memory [`GroupStore`], its JSON file format and the
//! locked atomic write used to save it.

pub mod error;
pub mod group;
pub mod io;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use group::HostsGroup;
pub use path::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, default_config_path};
pub use store::GroupStore;
