//! Configuration schema (coursegraph.toml)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Catalog term, used as a URL path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    #[default]
    Fall,
    Spring,
}

impl Term {
    /// Lowercase path segment ("fall", "spring")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fall => "fall",
            Self::Spring => "spring",
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Term {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fall" => Ok(Self::Fall),
            "spring" => Ok(Self::Spring),
            other => Err(ConfigError::InvalidValue(format!("unknown term '{}'", other))),
        }
    }
}

/// Where and how course entries are fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog root; `{year}/{term}/{DEPT}/{NUM}.xml` is appended
    pub base_url: String,

    /// Catalog year
    pub year: u16,

    /// Catalog term
    pub term: Term,

    /// Per-request timeout
    pub timeout_secs: u64,

    /// Maximum number of catalog requests in flight
    pub concurrency: usize,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://courses.illinois.edu/cisapp/explorer/catalog".to_string(),
            year: 2023,
            term: Term::Fall,
            timeout_secs: 30,
            concurrency: 8,
            user_agent: concat!("coursegraph/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CatalogConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// "see X" cross-reference handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Maximum number of cross-references followed for one course
    pub max_redirect_depth: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self { max_redirect_depth: 8 }
    }
}

/// Prerequisite clause filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Clauses containing any of these substrings (case-insensitive) are dropped
    pub noise: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            noise: [
                "students with previous",
                "https://",
                "http://",
                "edu",
                "illinois",
                "aleks",
                "high",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog access
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Cross-reference resolution
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Clause filters
    #[serde(default)]
    pub filters: FilterConfig,
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&contents)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(toml)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or break a run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.concurrency == 0 {
            return Err(ConfigError::InvalidValue(
                "catalog.concurrency must be at least 1".to_string(),
            ));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "catalog.timeout_secs must be at least 1".to_string(),
            ));
        }

        if self.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "catalog.base_url must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.catalog.year, 2023);
        assert_eq!(config.catalog.term, Term::Fall);
        assert_eq!(config.resolution.max_redirect_depth, 8);
        assert!(config.filters.noise.contains(&"aleks".to_string()));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [catalog]
            year = 2024
            term = "spring"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.year, 2024);
        assert_eq!(config.catalog.term, Term::Spring);
        assert_eq!(config.catalog.concurrency, 8);
        assert_eq!(config.resolution, ResolutionConfig::default());
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let err = Config::from_toml("[catalog]\nconcurrency = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn unknown_term_is_a_parse_error() {
        let err = Config::from_toml("[catalog]\nterm = \"autumn\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn term_from_str() {
        assert_eq!("Spring".parse::<Term>().unwrap(), Term::Spring);
        assert!("winter".parse::<Term>().is_err());
    }

    #[test]
    fn config_toml_roundtrip() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed = Config::from_toml(&toml).unwrap();
        assert_eq!(config, parsed);
    }
}
