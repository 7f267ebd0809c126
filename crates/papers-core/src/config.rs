//! Configuration for papers-core
//!
//! Signal keyword sets and PubMed E-utilities settings. Every field has a
//! default, so a config file only needs the keys it overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signals::SignalSet;

/// Name of the directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "get-papers-list";
/// File name looked up in [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_EMAIL: &str = "NCBI_EMAIL";
pub const ENV_API_KEY: &str = "NCBI_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("Empty keyword in {0} signal set")]
    EmptyKeyword(&'static str),
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PapersConfig {
    /// Keyword sets used by the classifier and the company extractor
    pub signals: SignalConfig,
    /// PubMed E-utilities settings
    pub pubmed: PubMedConfig,
}

/// Academic and commercial keyword sets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SignalConfig {
    pub academic: SignalSet,
    /// Also the company-extraction order
    pub commercial: SignalSet,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            academic: SignalSet::academic(),
            commercial: SignalSet::commercial(),
        }
    }
}

/// PubMed E-utilities settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PubMedConfig {
    /// E-utilities root, ending with `/`
    pub base_url: String,
    /// Contact email sent with every request (NCBI asks for one)
    pub email: String,
    /// Tool name sent with every request
    pub tool: String,
    /// Optional API key raising the rate limit from 3 to 10 requests/second
    pub api_key: Option<String>,
    /// Maximum number of PMIDs returned by a search
    pub retmax: u32,
    /// Maximum number of PMIDs per efetch request
    pub fetch_batch_size: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PubMedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/".to_string(),
            email: "your-email@example.com".to_string(),
            tool: "get-papers-list".to_string(),
            api_key: None,
            retmax: 100,
            fetch_batch_size: 200,
            timeout_secs: 30,
        }
    }
}

impl PapersConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load a config file; `.json` files are parsed as JSON, anything else as TOML
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }

    /// Default config file location, e.g. `~/.config/get-papers-list/config.toml`
    pub fn standard_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from `explicit` if given, else the standard path if it exists,
    /// else defaults. Environment overrides are applied, then the result is validated.
    pub fn load_standard(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                Self::from_file(path)?
            }
            None => match Self::standard_path().filter(|p| p.is_file()) {
                Some(path) => {
                    tracing::debug!("Loading config from {:?}", path);
                    Self::from_file(&path)?
                }
                None => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `NCBI_EMAIL` / `NCBI_API_KEY` overrides from `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(email) = lookup(ENV_EMAIL).filter(|v| !v.trim().is_empty()) {
            self.pubmed.email = email;
        }
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.pubmed.api_key = Some(key);
        }
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        // An empty keyword is a substring of every text.
        if has_blank(&self.signals.academic) {
            return Err(ConfigError::EmptyKeyword("academic"));
        }
        if has_blank(&self.signals.commercial) {
            return Err(ConfigError::EmptyKeyword("commercial"));
        }
        if self.signals.commercial.is_empty() {
            tracing::warn!("Commercial signal set is empty; no affiliation will be flagged");
        }

        if self.pubmed.retmax == 0 {
            return Err(ConfigError::OutOfRange("retmax must be positive".to_string()));
        }
        if self.pubmed.fetch_batch_size == 0 {
            return Err(ConfigError::OutOfRange(
                "fetch_batch_size must be positive".to_string(),
            ));
        }
        if self.pubmed.timeout_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "timeout_secs must be positive".to_string(),
            ));
        }
        url::Url::parse(&self.pubmed.base_url)?;

        Ok(())
    }
}

fn has_blank(set: &SignalSet) -> bool {
    set.keywords().iter().any(|k| k.trim().is_empty())
}
