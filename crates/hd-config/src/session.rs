//! Session persistence settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the persisted session keys. Empty means
    /// `~/.helpdesk`.
    #[serde(default)]
    pub storage_dir: String,
}

impl SessionConfig {
    /// Resolved storage directory, or `None` when no home directory exists
    /// and none was configured.
    #[must_use]
    pub fn storage_dir(&self) -> Option<PathBuf> {
        if self.storage_dir.trim().is_empty() {
            dirs::home_dir().map(|home| home.join(".helpdesk"))
        } else {
            Some(PathBuf::from(self.storage_dir.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = SessionConfig {
            storage_dir: "/tmp/hd-session".into(),
        };
        assert_eq!(config.storage_dir(), Some(PathBuf::from("/tmp/hd-session")));
    }

    #[test]
    fn default_lives_under_home() {
        let config = SessionConfig::default();
        if let Some(dir) = config.storage_dir() {
            assert!(dir.ends_with(".helpdesk"));
        }
    }
}
