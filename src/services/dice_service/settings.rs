use std::{fs, path::Path};

use serde::Deserialize;

use super::error::SettingsError;

///
/// Limits enforced on every roll, checked before any entropy is drawn.
/// Missing fields fall back to their defaults, which impose no limit.
///
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiceSettings {
    pub max_dice: i64,
    pub max_sides: i64,
}

impl Default for DiceSettings {
    fn default() -> Self {
        Self {
            max_dice: i64::MAX,
            max_sides: i64::MAX,
        }
    }
}

impl DiceSettings {
    ///
    /// Loads settings from the JSON file at `path`
    ///
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
