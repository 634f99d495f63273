//! Payloads for the configuration check endpoints.

use crate::config::Config;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const CONFIGURED: &str = "configured";
pub const MISSING: &str = "MISSING";

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub has_sportradar_key: bool,
    pub has_odds_api_key: bool,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn new(config: &Config, now: DateTime<Utc>) -> Self {
        Self {
            status: "ok".to_string(),
            has_sportradar_key: config.has_sportradar_key(),
            has_odds_api_key: config.has_odds_key(),
            timestamp: timestamp(now),
        }
    }
}

/// Body of `GET /api/test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCheckResponse {
    pub message: String,
    pub sportradar_key: String,
    pub odds_api_key: String,
    pub timestamp: String,
}

impl KeyCheckResponse {
    pub fn new(config: &Config, now: DateTime<Utc>) -> Self {
        Self {
            message: "API is working!".to_string(),
            sportradar_key: presence(config.has_sportradar_key()).to_string(),
            odds_api_key: presence(config.has_odds_key()).to_string(),
            timestamp: timestamp(now),
        }
    }
}

fn presence(configured: bool) -> &'static str {
    if configured {
        CONFIGURED
    } else {
        MISSING
    }
}

fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
