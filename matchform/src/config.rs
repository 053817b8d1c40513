use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use matchform_ipc::MatcherNode;

const APP_DIR: &str = "matchform";
const CONFIG_FILE: &str = "config.json";
const MATCHERS_KEY: &str = "matchers";

/// Resolved settings for a run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
}

impl Settings {
    /// Use the given path, or `<config dir>/matchform/config.json`.
    pub fn resolve(config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => dirs::config_dir()
                .context("Could not determine the user config directory")?
                .join(APP_DIR)
                .join(CONFIG_FILE),
        };
        Ok(Self { config_path })
    }
}

/// A JSON object backed by a config file. Every `set` writes the file.
#[derive(Debug, Default)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    data: Map<String, Value>,
}

impl ConfigStore {
    /// A store that is never written anywhere.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        if !path.exists() {
            fs::write(path, "{}").with_context(|| format!("Failed to create {}", path.display()))?;
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let data = match serde_json::from_str::<Map<String, Value>>(&text) {
            Ok(data) => data,
            Err(e) => {
                // The next write replaces the file, so keep the unreadable content aside
                let backup = path.with_extension("json.bak");
                fs::copy(path, &backup)
                    .with_context(|| format!("Failed to back up {}", path.display()))?;
                tracing::warn!(
                    "Ignoring unreadable config {} (kept as {}): {}",
                    path.display(),
                    backup.display(),
                    e
                );
                Map::new()
            }
        };

        tracing::debug!("Opened config {}", path.display());
        Ok(Self {
            path: Some(path.to_path_buf()),
            data,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.data.insert(key.to_string(), value);
        self.write()
    }

    /// The stored matcher document; missing means empty.
    pub fn matchers(&self) -> Result<Vec<MatcherNode>> {
        match self.get(MATCHERS_KEY) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone())
                .context("Invalid matchers in config"),
        }
    }

    pub fn set_matchers(&mut self, matchers: &[MatcherNode]) -> Result<()> {
        self.set(MATCHERS_KEY, serde_json::to_value(matchers)?)
    }

    /// Remove the backing file (and its directory when empty). The store
    /// keeps working in memory afterwards.
    pub fn delete(&mut self) -> Result<()> {
        let Some(path) = self.path.take() else {
            return Ok(());
        };
        fs::remove_file(&path).with_context(|| format!("Failed to remove {}", path.display()))?;
        if let Some(dir) = path.parent() {
            if let Err(e) = fs::remove_dir(dir) {
                tracing::debug!("Keeping {}: {}", dir.display(), e);
            }
        }
        Ok(())
    }

    fn write(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
