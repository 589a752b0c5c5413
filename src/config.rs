use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Application configuration settings.
///
/// Everything here has a sensible default; a JSON config file only needs to
/// name the fields it overrides.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Placeholder title given to newly added events
    pub default_title: String,

    /// Placeholder location given to newly added events
    pub default_location: String,

    /// Default duration of a newly added event, in minutes
    pub default_duration_minutes: u32,

    /// Whether to seed the store with the built-in demo events at startup
    pub seed_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_title: "New Event".to_string(),
            default_location: "New Location".to_string(),
            default_duration_minutes: 60,
            seed_events: true,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file, falling back to defaults for
    /// any field the file leaves out.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
