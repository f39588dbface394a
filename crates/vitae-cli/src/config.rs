//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `VITAE_<SECTION>__<KEY>`, plus the conventional
//!    `OPENAI_*` variables for AI settings
//! 3. Config file (`--config FILE` or the platform config path)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use vitae_adapters::{
    AiSettings,
    ai::{API_KEY_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL},
};

/// Environment variable naming the default model.
pub const MODEL_VAR: &str = "OPENAI_MODEL";
/// Environment variable naming the API base URL.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Text generation settings.
    pub ai: AiConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// `extract` settings.
    pub extract: ExtractConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Default output file of `vitae extract`.
    pub output: PathBuf,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("resume_extracted.json"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            output: OutputConfig::default(),
            extract: ExtractConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the TOML file, then `VITAE_*`
    /// environment variables.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => config::File::from(path.as_path())
                .format(config::FileFormat::Toml)
                .required(true),
            None => config::File::from(Self::config_path())
                .format(config::FileFormat::Toml)
                .required(false),
        };

        config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("VITAE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.vitae.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "vitae", "vitae")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".vitae.toml"))
    }

    /// The file `load` read from: the `--config` path when given.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file.map_or_else(Self::config_path, Path::to_path_buf)
    }

    /// Resolve AI connection settings from the process environment.
    pub fn ai_settings(&self, model_flag: Option<&str>) -> AiSettings {
        self.resolve_ai_settings(model_flag, |name| std::env::var(name).ok())
    }

    /// Model: flag > `OPENAI_MODEL` > config. Base URL: `OPENAI_BASE_URL` >
    /// config. The credential only ever comes from `OPENAI_API_KEY`.
    fn resolve_ai_settings<F>(&self, model_flag: Option<&str>, env: F) -> AiSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| env(name).filter(|v| !v.trim().is_empty());

        AiSettings {
            api_key: env(API_KEY_VAR),
            model: model_flag
                .map(str::to_owned)
                .or_else(|| env(MODEL_VAR))
                .unwrap_or_else(|| self.ai.model.clone()),
            base_url: env(BASE_URL_VAR).unwrap_or_else(|| self.ai.base_url.clone()),
        }
    }
}
