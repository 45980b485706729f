pub mod presets;
pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use presets::Preset;
pub use storage::LocalStorage;
pub use toml_config::{OutputConfig, TomlConfig, TriangleEntry};
