mod adapter;
mod app_config;
mod file_config;
mod loader;

pub use adapter::FileConfigAdapter;
pub use app_config::{AppConfig, DemoConfig, LogConfig};
pub(crate) use loader::load;
