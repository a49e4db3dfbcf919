//! Configuration loading from `.socialrc.toml`.
//!
//! Configuration is optional - the CLI uses sensible defaults if no config
//! file exists or it cannot be parsed.
//!
//! # Example Configuration
//!
//! ```toml
//! [output]
//! format = "table"
//! color = true
//!
//! [recommend]
//! limit = 5
//!
//! [shell]
//! prompt = "social> "
//! ```

use serde::Deserialize;
use std::path::Path;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".socialrc.toml";

const DEFAULT_PROMPT: &str = "social> ";

/// Root configuration structure loaded from `.socialrc.toml`.
///
/// All sections are optional and will use defaults if not specified.
#[derive(Debug, Deserialize, Default)]
pub struct SocialConfig {
    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,

    /// Recommendation list settings.
    #[serde(default)]
    pub recommend: RecommendSettings,

    /// Interactive shell settings.
    #[serde(default)]
    pub shell: ShellSettings,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table` or `json`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Defaults to auto-detection.
    #[serde(default)]
    pub color: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RecommendSettings {
    /// Keep only the top `limit` suggestions. Default: all of them.
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ShellSettings {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl SocialConfig {
    /// Load configuration from `.socialrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Configured color override, or `None` to auto-detect.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    pub fn recommend_limit(&self) -> Option<usize> {
        self.recommend.limit
    }

    pub fn prompt(&self) -> &str {
        self.shell.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }
}
