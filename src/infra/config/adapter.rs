use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Loads `chatbook` settings from a TOML file, `./config.toml` unless a path is given.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        let config = load(self.path.as_deref())?;
        tracing::debug!(
            path = ?self.path,
            log_level = %config.logging.level,
            recent_count = config.demo.recent_count,
            "chatbook config loaded"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_demo_settings_from_given_path() {
        let dir = tempfile::tempdir().expect("must create temp dir");
        let config_path = dir.path().join("chatbook.toml");
        std::fs::write(&config_path, "[demo]\nrecent_count = 3\n")
            .expect("must write test config");

        let config = FileConfigAdapter::new(Some(&config_path))
            .load()
            .expect("config must load");

        assert_eq!(config.demo.recent_count, 3);
        assert_eq!(config.logging, crate::infra::config::LogConfig::default());
    }
}
