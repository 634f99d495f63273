use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

const CONFIG_FILE: &str = "config.toml";

const ODDS_API_KEY_VAR: &str = "ODDS_API_KEY";
const SPORTRADAR_KEY_VAR: &str = "SPORTRADAR_KEY";
const BIND_ADDR_VAR: &str = "BIND_ADDR";

/// Settings for The Odds API.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct OddsApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub sport: String,
    pub regions: String,
    pub markets: String,
    pub odds_format: String,
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.the-odds-api.com".to_string(),
            sport: "basketball_nba".to_string(),
            regions: "us".to_string(),
            markets: "spreads,totals".to_string(),
            odds_format: "american".to_string(),
        }
    }
}

impl fmt::Debug for OddsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OddsApiConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("sport", &self.sport)
            .field("regions", &self.regions)
            .field("markets", &self.markets)
            .field("odds_format", &self.odds_format)
            .finish()
    }
}

/// Settings for the Sportradar NBA API (schedule and injuries).
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SportradarConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub access_level: String,
    pub version: String,
    pub language: String,
}

impl Default for SportradarConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.sportradar.us".to_string(),
            access_level: "trial".to_string(),
            version: "v8".to_string(),
            language: "en".to_string(),
        }
    }
}

impl fmt::Debug for SportradarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SportradarConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("access_level", &self.access_level)
            .field("version", &self.version)
            .field("language", &self.language)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub odds: OddsApiConfig,
    pub sportradar: SportradarConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load `config.toml` from the working directory if it exists, then apply
    /// environment overrides.
    pub fn new() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env(|name| std::env::var(name).ok());
        info!("Config: {:?}", config);
        Ok(config)
    }

    /// Load a specific TOML file. No environment overrides are applied.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&config_str)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.odds.api_key = normalize_key(config.odds.api_key.take());
        config.sportradar.api_key = normalize_key(config.sportradar.api_key.take());
        Ok(config)
    }

    /// Override file values with `ODDS_API_KEY`, `SPORTRADAR_KEY` and
    /// `BIND_ADDR`, read through `lookup`. Blank variables are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = normalize_key(lookup(ODDS_API_KEY_VAR)) {
            self.odds.api_key = Some(key);
        }
        if let Some(key) = normalize_key(lookup(SPORTRADAR_KEY_VAR)) {
            self.sportradar.api_key = Some(key);
        }
        if let Some(bind) = normalize_key(lookup(BIND_ADDR_VAR)) {
            self.server.bind = bind;
        }
    }

    pub fn has_odds_key(&self) -> bool {
        self.odds.api_key.is_some()
    }

    pub fn has_sportradar_key(&self) -> bool {
        self.sportradar.api_key.is_some()
    }
}

fn normalize_key(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn redact(key: &Option<String>) -> &'static str {
    match key {
        Some(_) => "<redacted>",
        None => "<none>",
    }
}
