#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, CodeKind, Command, EmojiSource, OutputFormat};
pub use toml_config::FlagKitConfig;
