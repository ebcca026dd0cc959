//! JSON persistence helpers for files under ~/.resource-explorer/.

use crate::core::config::{GameConfig, CONFIG_FILENAME};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const GAME_DIR_NAME: &str = ".resource-explorer";

/// Get the ~/.resource-explorer/ directory path, creating it if needed.
pub fn game_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(GAME_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.resource-explorer/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(game_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if it is missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable {}: {}", path.display(), e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the engine configuration, falling back to defaults.
pub fn load_config() -> GameConfig {
    match save_path(CONFIG_FILENAME) {
        Ok(path) => load_json_or_default(&path),
        Err(e) => {
            log::warn!("No config directory ({}), using defaults", e);
            GameConfig::default()
        }
    }
}

/// Write `config` to the config file and return where it went.
pub fn save_config(config: &GameConfig) -> io::Result<PathBuf> {
    let path = save_path(CONFIG_FILENAME)?;
    save_json(&path, config)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "resource_explorer_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_load_missing_returns_default() {
        let path = temp_file("missing");
        let val: Vec<String> = load_json_or_default(&path);
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let path = temp_file("config");
        let config = GameConfig {
            time_unit_ms: 20,
            cancel_pending_on_reset: true,
            ..GameConfig::default()
        };
        save_json(&path, &config).expect("save should succeed");

        let loaded: GameConfig = load_json_or_default(&path);
        assert_eq!(loaded, config);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_invalid_json_returns_default() {
        let path = temp_file("invalid");
        fs::write(&path, "{ not json").expect("write temp file");

        let loaded: GameConfig = load_json_or_default(&path);
        assert_eq!(loaded, GameConfig::default());

        fs::remove_file(path).ok();
    }
}
