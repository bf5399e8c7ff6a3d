//! Configuration, managed by [`confique`].
//!
//! Values are resolved in priority order: command-line flags (applied by
//! the binary after loading), environment variables (`TODZ_BUCKET`,
//! `TODZ_DB_PATH`), `todz.toml` in the OS config directory, then compiled
//! defaults. There is no process-wide state; the loaded config is passed
//! explicitly to whoever needs it.

use std::path::{Path, PathBuf};

use confique::Config;
use serde::{Deserialize, Serialize};

/// Configuration for todz, stored in `todz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TodzConfig {
    /// Bucket (database table) holding the todos.
    #[config(env = "TODZ_BUCKET", default = "todos")]
    pub bucket: String,

    /// Database file override. When absent, `todz.db` in the OS data
    /// directory is used.
    #[config(env = "TODZ_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Reserved: rate for due-date-based re-prioritization.
    #[config(default = 0)]
    pub due_prioritization_rate: u32,
}

impl Default for TodzConfig {
    fn default() -> Self {
        Self {
            bucket: "todos".to_string(),
            db_path: None,
            due_prioritization_rate: 0,
        }
    }
}

impl TodzConfig {
    /// Loads config from `dir/todz.toml` layered under env vars. A missing
    /// file is fine; defaults fill the gaps.
    pub fn load(dir: &Path) -> Result<Self, confique::Error> {
        Self::builder().env().file(dir.join("todz.toml")).load()
    }

    /// Resolves the database path, falling back to `todz.db` under the
    /// given data directory.
    pub fn db_path(&self, data_dir: &Path) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| data_dir.join("todz.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TodzConfig::default();
        assert_eq!(config.bucket, "todos");
        assert_eq!(config.db_path, None);
        assert_eq!(config.due_prioritization_rate, 0);
    }

    #[test]
    fn test_db_path_fallback() {
        let config = TodzConfig::default();
        assert_eq!(
            config.db_path(Path::new("/data")),
            PathBuf::from("/data/todz.db")
        );
    }

    #[test]
    fn test_db_path_override() {
        let config = TodzConfig {
            db_path: Some(PathBuf::from("/elsewhere/t.db")),
            ..Default::default()
        };
        assert_eq!(
            config.db_path(Path::new("/data")),
            PathBuf::from("/elsewhere/t.db")
        );
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TodzConfig::load(dir.path()).unwrap();
        assert_eq!(config, TodzConfig::default());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("todz.toml"), "bucket = \"work\"\n").unwrap();

        let config = TodzConfig::load(dir.path()).unwrap();
        assert_eq!(config.bucket, "work");
    }
}
