use std::{fs, path::Path};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, game::Action};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub game: GameSettings,
    pub keys: Keymap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fia".to_string(),
            width: 640,
            height: 480,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Frames the die spins after a roll. Input is locked meanwhile; 0 disables the lock.
    pub roll_animation_frames: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { roll_animation_frames: 60 }
    }
}

/// Maps lower-case key names (as reported by the frontend) to actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keymap(HashMap<String, Action>);

impl Keymap {
    pub fn empty() -> Self {
        Keymap(HashMap::new())
    }

    pub fn bind(&mut self, key: &str, action: Action) {
        self.0.insert(key.to_ascii_lowercase(), action);
    }

    pub fn action(&self, key: &str) -> Option<Action> {
        self.0.get(key.to_ascii_lowercase().as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Action)> {
        self.0.iter().map(|(key, &action)| (key.as_str(), action))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Keymap::empty();
        keymap.bind("space", Action::RollDie);
        keymap.bind("return", Action::ConfirmMove);
        keymap.bind("s", Action::SkipTurn);
        keymap.bind("right", Action::SelectNext);
        keymap.bind("left", Action::SelectPrevious);
        keymap.bind("escape", Action::CancelToMenu);
        keymap
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.keys.is_empty() {
            return Err(ConfigError::Invalid("no key bindings".to_string()));
        }
        if let Some((key, _)) = self.keys.iter().find(|(key, _)| key.chars().any(|c| c.is_ascii_uppercase())) {
            return Err(ConfigError::Invalid(format!("key name '{}' must be lower-case", key)));
        }
        if self.keys.iter().all(|(_, action)| action != Action::RollDie) {
            return Err(ConfigError::Invalid("no key is bound to roll-die".to_string()));
        }
        Ok(())
    }
}
