use serde::Deserialize;

use crate::infra::config::{AppConfig, DemoConfig, LogConfig};

/// All-optional mirror of [`AppConfig`] so partial files merge over defaults.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub demo: Option<FileDemoConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(demo) = self.demo {
            demo.merge_into(&mut config.demo);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDemoConfig {
    pub recent_count: Option<usize>,
}

impl FileDemoConfig {
    fn merge_into(self, config: &mut DemoConfig) {
        if let Some(recent_count) = self.recent_count {
            config.recent_count = recent_count;
        }
    }
}
