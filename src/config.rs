use crate::app_dirs::AppDirs;
use crate::error::{Error, Result};
use crate::language::{Difficulty, TimeLimit};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Last confirmed setup, restored as the setup screen's initial selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub difficulty: Difficulty,
    pub time_limit: TimeLimit,
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Result<Self> {
        AppDirs::config_path()
            .map(|path| Self { path })
            .ok_or(Error::NoConfigDir)
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<Config> {
        let bytes = fs::read(&self.path)?;
        serde_json::from_slice(&bytes).map_err(|source| Error::ConfigParse {
            path: self.path.clone(),
            source,
        })
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match self.try_load() {
            Ok(cfg) => cfg,
            Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(|source| Error::ConfigParse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Store that keeps nothing; used when no config dir exists and in tests
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryConfigStore {
    pub initial: Config,
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Config {
        self.initial
    }

    fn save(&self, _cfg: &Config) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            difficulty: Difficulty::Hard,
            time_limit: TimeLimit::OneTwenty,
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"hard\""));
        assert!(raw.contains("120"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
        assert_eq!(Config::default().difficulty, Difficulty::Medium);
        assert_eq!(Config::default().time_limit, TimeLimit::Sixty);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").unwrap();
        let store = FileConfigStore::with_path(&path);

        assert!(matches!(store.try_load(), Err(Error::ConfigParse { .. })));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn unsupported_time_limit_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "difficulty": "easy", "time_limit": 45 }"#).unwrap();
        let store = FileConfigStore::with_path(&path);

        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "difficulty": "easy" }"#).unwrap();
        let store = FileConfigStore::with_path(&path);

        let cfg = store.load();
        assert_eq!(cfg.difficulty, Difficulty::Easy);
        assert_eq!(cfg.time_limit, TimeLimit::Sixty);
    }
}
