use crate::error::{ReaderError, Result};
use deed_filter::{FilterConfig, FilterMode};
use deed_parser::ParserConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a TOML config file
pub const CONFIG_ENV_VAR: &str = "DEED_READER_CONFIG";

/// Pipeline configuration, usually loaded from TOML.
///
/// ```toml
/// filter_mode = "rule_based"
///
/// [filter]
/// relevance_threshold = 0.25
/// ai_timeout_secs = 60
///
/// [parser]
/// min_confidence = 0.8
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReaderConfig {
    pub filter_mode: FilterMode,
    pub filter: FilterConfig,
    pub parser: ParserConfig,
}

impl ReaderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ReaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// `explicit` path, else the file named by [`CONFIG_ENV_VAR`], else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.filter
            .validate()
            .map_err(|msg| ReaderError::invalid_config(format!("filter: {msg}")))?;
        self.parser
            .validate()
            .map_err(|msg| ReaderError::invalid_config(format!("parser: {msg}")))?;
        Ok(())
    }
}
