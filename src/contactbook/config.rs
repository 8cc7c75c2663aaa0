use crate::error::{ContactError, Result};
use crate::store::DEFAULT_FILENAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 10;

pub const KEY_PAGE_SIZE: &str = "page-size";
pub const KEY_DATA_FILE: &str = "data-file";

/// Configuration for the contact book, stored as config.json in the data dir
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Contacts per page when listing without an explicit page size
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Where the book is stored; relative paths resolve against the data dir
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            data_file: None,
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(ContactError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactError::Serialization)?;
        fs::write(config_path, content).map_err(ContactError::Io)?;
        Ok(())
    }

    /// Resolves the book file: configured path (relative to `data_dir`) or
    /// the default file name inside `data_dir`.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) => data_dir.join(path),
            None => data_dir.join(DEFAULT_FILENAME),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_PAGE_SIZE => Some(self.page_size.to_string()),
            KEY_DATA_FILE => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_PAGE_SIZE => match value.parse::<usize>() {
                Ok(n) if n > 0 => {
                    self.page_size = n;
                    Ok(())
                }
                _ => Err(format!(
                    "{} must be a positive number, got '{}'",
                    KEY_PAGE_SIZE, value
                )),
            },
            KEY_DATA_FILE => {
                if value.is_empty() {
                    return Err(format!("{} cannot be empty", KEY_DATA_FILE));
                }
                self.data_file = Some(PathBuf::from(value));
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_PAGE_SIZE, KEY_DATA_FILE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BookConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_data_path_defaults_to_addressbook_dat() {
        let config = BookConfig::default();
        assert_eq!(
            config.data_path(Path::new("/data")),
            PathBuf::from("/data/addressbook.dat")
        );
    }

    #[test]
    fn test_data_path_relative_and_absolute() {
        let mut config = BookConfig::default();
        config.set(KEY_DATA_FILE, "work.dat").unwrap();
        assert_eq!(
            config.data_path(Path::new("/data")),
            PathBuf::from("/data/work.dat")
        );

        config.set(KEY_DATA_FILE, "/tmp/other.dat").unwrap();
        assert_eq!(
            config.data_path(Path::new("/data")),
            PathBuf::from("/tmp/other.dat")
        );
    }

    #[test]
    fn test_set_page_size() {
        let mut config = BookConfig::default();
        config.set(KEY_PAGE_SIZE, "25").unwrap();
        assert_eq!(config.get(KEY_PAGE_SIZE).as_deref(), Some("25"));

        assert!(config.set(KEY_PAGE_SIZE, "0").is_err());
        assert!(config.set(KEY_PAGE_SIZE, "-3").is_err());
        assert!(config.set(KEY_PAGE_SIZE, "ten").is_err());
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = BookConfig::default();
        assert_eq!(config.get("colour"), None);
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BookConfig::load(temp_dir.path().join("missing")).unwrap();
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = BookConfig::default();
        config.set(KEY_PAGE_SIZE, "3").unwrap();
        config.save(&dir).unwrap();

        let loaded = BookConfig::load(&dir).unwrap();
        assert_eq!(loaded.page_size, 3);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: BookConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, BookConfig::default());
    }
}
