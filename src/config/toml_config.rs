use crate::domain::model::{ContentMode, FlagStyle};
use crate::utils::error::{FlagKitError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const MAX_CORNER_RADIUS: f32 = 10_000.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagKitConfig {
    pub assets: AssetsConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub path: String,
    pub extension: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            path: "./assets/flags".to_string(),
            extension: "png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub style: FlagStyle,
    pub content_mode: ContentMode,
    pub width: usize,
    pub height: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            style: FlagStyle::Default,
            content_mode: ContentMode::Fill,
            width: 50,
            height: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl FlagKitConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FlagKitError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, expanding `${VAR}` first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FlagKitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("assets.path", &self.assets.path)?;
        validation::validate_file_token("assets.extension", &self.assets.extension)?;

        if let FlagStyle::Rounded(radius) = self.display.style {
            validation::validate_range("display.style.rounded", radius, 0.0, MAX_CORNER_RADIUS)?;
        }
        validation::validate_positive_number("display.width", self.display.width, 1)?;
        validation::validate_positive_number("display.height", self.display.height, 1)?;

        validation::validate_one_of("logging.level", &self.logging.level, LOG_LEVELS)?;

        Ok(())
    }

    pub fn assets_path(&self) -> &str {
        &self.assets.path
    }

    pub fn extension(&self) -> &str {
        &self.assets.extension
    }
}

impl Validate for FlagKitConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
