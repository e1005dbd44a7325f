use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration, read from `~/.config/promptdeck/config.toml`.
/// A missing or unreadable file falls back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the corpus server hosting the semantic matcher.
    pub endpoint: String,
    /// Timeout applied to each matcher request.
    pub timeout_ms: u64,
    pub palette: PaletteType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8800".to_string(),
            timeout_ms: 10_000,
            palette: PaletteType::CatppuccinMocha,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        home::home_dir().map(|mut path| {
            path.push(".config");
            path.push("promptdeck");
            path
        })
    }

    #[must_use]
    pub fn load() -> Self {
        Self::config_dir()
            .map(|dir| Self::load_from(&dir.join("config.toml")))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }
}
