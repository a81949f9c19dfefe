use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const OPTIONS_FILE: &str = "inpoll.json";

/// Which device signals a session ingests.
///
/// Disabled signals make the corresponding apply calls no-ops; a host can
/// also read the flags to skip registering the listeners in the first
/// place. `suppress_context_menu` is a hint for hosts whose secondary
/// button opens a context menu; the core does not act on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionOptions {
    /// Track pointer buttons and movement.
    pub track_mouse: bool,
    /// Track wheel ticks.
    pub track_wheel: bool,
    /// Track key codes.
    pub track_keyboard: bool,
    /// Ask the host to swallow secondary-button context menus.
    pub suppress_context_menu: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            track_mouse: true,
            track_wheel: true,
            track_keyboard: true,
            suppress_context_menu: false,
        }
    }
}

impl SessionOptions {
    /// Load options from the default file.
    pub fn load() -> Result<Self> {
        Self::load_from(OPTIONS_FILE)
    }

    /// Load options from a specific path, falling back to defaults when the
    /// file does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let options = serde_json::from_str(&content)?;
        Ok(options)
    }

    /// Save options to the default file.
    pub fn save(&self) -> Result<()> {
        self.save_to(OPTIONS_FILE)
    }

    /// Save options to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_track_everything() {
        let options = SessionOptions::default();
        assert!(options.track_mouse);
        assert!(options.track_wheel);
        assert!(options.track_keyboard);
        assert!(!options.suppress_context_menu);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let options = SessionOptions::load_from(dir.path().join("absent.json")).unwrap();

        assert_eq!(options, SessionOptions::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");

        let options = SessionOptions {
            track_mouse: true,
            track_wheel: false,
            track_keyboard: true,
            suppress_context_menu: true,
        };
        options.save_to(&path).unwrap();
        let loaded = SessionOptions::load_from(&path).unwrap();

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, r#"{"track_wheel": false}"#).unwrap();

        let loaded = SessionOptions::load_from(&path).unwrap();
        assert!(!loaded.track_wheel);
        assert!(loaded.track_mouse);
        assert!(loaded.track_keyboard);
    }
}
