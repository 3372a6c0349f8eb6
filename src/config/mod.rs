//! Configuration loading and defaults.

mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides};
pub use types::{Config, FetchConfig, UiConfig, DEFAULT_URL};
