use anyhow::Result;

use crate::infra::{config::AppConfig, contracts::ConfigAdapter};

/// Config source that always yields defaults, for tests that must not touch disk.
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.demo.recent_count, 2);
    }
}
