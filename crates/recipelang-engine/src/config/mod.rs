mod loader;
mod schema;

pub use loader::{CONFIG_ENV, ConfigError, ConfigLoader};
pub use schema::{BatchConfig, OutputConfig, OutputFormat, RecipeLangConfig, ReplConfig};
