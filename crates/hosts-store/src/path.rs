//! Default location of the group store file.

use std::path::PathBuf;

use crate::{Error, Result};

/// Directory under `~/.config` holding the store.
pub const CONFIG_DIR_NAME: &str = "hosts-manager";

/// File name of the store.
pub const CONFIG_FILE_NAME: &str = "hosts-manager.json";

/// `~/.config/hosts-manager/hosts-manager.json`
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_shape() {
        // Home may be missing in minimal sandboxes
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with(".config/hosts-manager/hosts-manager.json"));
        }
    }
}
