//! Configuration file loading for intentai
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `INTENTAI_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./intentai.toml` or `./.intentai.toml`
//! 4. Global: `$XDG_CONFIG_HOME/intentai/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDetectionConfig, FileOutputConfig, FileToolConfig, FileToolParameter,
};
pub use loader::ConfigLoader;
