//! Configuration file loading for debate-arena
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ARENA_*` environment variables
//! 2. `--config <path>` specified file (TOML, or JSON by extension)
//! 3. Project root: `./debate.toml` or `./.debate.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/debate-arena/config.toml`
//! 5. Default values
//!
//! When no source describes a debate, the CLI falls back to a
//! [`DebatePreset`].

mod error;
mod file_config;
mod loader;
mod presets;

pub use error::ConfigError;
pub use file_config::{
    DEFAULT_BASE_URL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECONDS, FileConfig, FileDebateConfig,
    FileOutputConfig, FileParticipantConfig, FileResponderConfig,
};
pub use loader::ConfigLoader;
pub use presets::{DebatePreset, PRESET_CHALLENGERS, PRESETS};
