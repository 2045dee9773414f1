//! Path management for budgetboard
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETBOARD_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/budgetboard`, `%APPDATA%\budgetboard`, ...)
//! 3. `$HOME/.config/budgetboard`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::BoardError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGETBOARD_DATA_DIR";

/// Manages all paths used by budgetboard
#[derive(Debug, Clone)]
pub struct BoardPaths {
    base_dir: PathBuf,
}

impl BoardPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, BoardError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BoardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BoardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BoardError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BoardError> {
    if let Some(dirs) = BaseDirs::new() {
        return Ok(dirs.config_dir().join("budgetboard"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| BoardError::Config("Could not determine home directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("budgetboard"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("board");
        let paths = BoardPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }

    #[test]
    fn test_default_path_ends_with_app_name() {
        let path = resolve_default_path().unwrap();
        assert!(path.ends_with("budgetboard"));
    }
}
