//! Infrastructure layer: config loading, logging and error plumbing.

pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;
#[cfg(test)]
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
