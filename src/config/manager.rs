use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{MozhiError, Result};
use crate::paths;
use crate::translation::{
    AUTO_DETECT, ClientConfig, DEFAULT_ENGINE, DEFAULT_MIRRORS, DEFAULT_TIMEOUT, Selection,
};

/// Default settings in the `[mozhi]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MozhiConfig {
    /// Default engine name.
    pub engine: Option<String>,
    /// Default source language.
    pub source: Option<String>,
    /// Default target language.
    pub target: Option<String>,
    /// Mirror selection policy.
    pub selection: Option<Selection>,
    /// Request timeout in seconds, `0` disables it.
    pub timeout_secs: Option<u64>,
    /// Mirror base URLs replacing the built-in list.
    pub mirrors: Option<Vec<String>>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/mozhi/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub mozhi: MozhiConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub engine: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub selection: Option<Selection>,
    pub timeout_secs: Option<u64>,
    /// Empty means "not given on the command line".
    pub mirrors: Vec<String>,
}

/// Settings after merging CLI arguments, config file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub client: ClientConfig,
    pub source: String,
    /// Only required when translating.
    pub target: Option<String>,
    pub selection: Selection,
    /// `None` disables the request timeout.
    pub timeout: Option<Duration>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let file = &config_file.mozhi;

    let engine = options
        .engine
        .clone()
        .or_else(|| file.engine.clone())
        .unwrap_or_else(|| DEFAULT_ENGINE.to_string());

    let mirrors: Vec<String> = if !options.mirrors.is_empty() {
        options.mirrors.clone()
    } else if let Some(mirrors) = &file.mirrors {
        mirrors.clone()
    } else {
        DEFAULT_MIRRORS.iter().map(ToString::to_string).collect()
    };

    let client = ClientConfig::new(&mirrors, engine)?;

    let source = options
        .source
        .clone()
        .or_else(|| file.source.clone())
        .unwrap_or_else(|| AUTO_DETECT.to_string());

    let target = options
        .target
        .clone()
        .or_else(|| file.target.clone())
        .filter(|t| !t.trim().is_empty());

    let selection = options
        .selection
        .or(file.selection)
        .unwrap_or_default();

    let timeout = match options.timeout_secs.or(file.timeout_secs) {
        Some(0) => None,
        Some(secs) => Some(Duration::from_secs(secs)),
        None => Some(DEFAULT_TIMEOUT),
    };

    Ok(ResolvedConfig {
        client,
        source,
        target,
        selection,
        timeout,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/mozhi/config.toml`
    /// or `~/.config/mozhi/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_file()?,
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path)
            .map_err(|e| MozhiError::file(self.config_path.display().to_string(), e))?;

        toml::from_str(&contents).map_err(|e| {
            MozhiError::InvalidConfig(format!(
                "failed to parse {}: {e}",
                self.config_path.display()
            ))
        })
    }

    /// Loads the config file, treating a missing file as an empty one.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match self.load() {
            Err(MozhiError::File { reason, .. }) if reason.kind() == io::ErrorKind::NotFound => {
                Ok(ConfigFile::default())
            }
            other => other,
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| MozhiError::file(parent.display().to_string(), e))?;
        }

        let contents = toml::to_string_pretty(config).map_err(|e| {
            MozhiError::InvalidConfig(format!("failed to serialize config: {e}"))
        })?;

        fs::write(&self.config_path, contents)
            .map_err(|e| MozhiError::file(self.config_path.display().to_string(), e))
    }
}
