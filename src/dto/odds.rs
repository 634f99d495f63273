use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const SPREADS_MARKET: &str = "spreads";
pub const TOTALS_MARKET: &str = "totals";
pub const OVER_OUTCOME: &str = "Over";

/// One game from `GET /v4/sports/{sport}/odds`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OddsEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commence_time: Option<String>,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Bookmaker {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markets: Vec<Market>,
}

impl Bookmaker {
    pub fn market(&self, key: &str) -> Option<&Market> {
        self.markets.iter().find(|m| m.key == key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Market {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

impl Market {
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Outcome {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<Decimal>,
}
