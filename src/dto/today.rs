use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ODDS_PROVIDER: &str = "the-odds-api";
pub const INJURY_PROVIDER: &str = "sportradar";
pub const NO_PROVIDER: &str = "none";

pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_LIVE: &str = "live";
pub const UNKNOWN_INJURY_STATUS: &str = "Unknown";

/// Upstream identifier, or the record's position when the upstream has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Key(String),
    Index(usize),
}

impl GameId {
    pub fn from_upstream(id: Option<&str>, index: usize) -> Self {
        match id.filter(|s| !s.is_empty()) {
            Some(id) => GameId::Key(id.to_string()),
            None => GameId::Index(index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSource {
    #[serde(rename = "odds-api")]
    OddsApi,
    #[serde(rename = "sportradar")]
    Sportradar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub time: String,
    pub status: String,
    pub home: String,
    pub away: String,
    #[serde(default, with = "super::line_serde::option")]
    pub spread: Option<Decimal>,
    #[serde(default, with = "super::line_serde::option")]
    pub total: Option<Decimal>,
    pub source: GameSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryEntry {
    pub name: String,
    pub position: Option<String>,
    pub status: String,
}

/// Injury report keyed by team name.
pub type Injuries = BTreeMap<String, Vec<InjuryEntry>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sources {
    pub odds: String,
    pub injuries: String,
}

impl Sources {
    pub fn new(has_odds_key: bool, has_sportradar_key: bool) -> Self {
        Self {
            odds: if has_odds_key { ODDS_PROVIDER } else { NO_PROVIDER }.to_string(),
            injuries: if has_sportradar_key {
                INJURY_PROVIDER
            } else {
                NO_PROVIDER
            }
            .to_string(),
        }
    }
}

/// Body of `GET /api/today`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    pub date: String,
    pub games_count: usize,
    pub has_odds: bool,
    pub games: Vec<Game>,
    pub injuries: Injuries,
    pub sources: Sources,
}

impl TodayResponse {
    /// Derives `games_count` and `has_odds` from `games` so they cannot drift.
    pub fn new(date: String, games: Vec<Game>, injuries: Injuries, sources: Sources) -> Self {
        Self {
            date,
            games_count: games.len(),
            has_odds: games.iter().any(|g| g.spread.is_some()),
            games,
            injuries,
            sources,
        }
    }
}
