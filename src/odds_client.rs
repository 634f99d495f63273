use crate::config::OddsApiConfig;
use crate::dto::odds::{OddsEvent, OVER_OUTCOME, SPREADS_MARKET, TOTALS_MARKET};
use crate::dto::today::{Game, GameId, GameSource};
use crate::game_time;
use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Spread and total picked for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lines {
    pub spread: Option<Decimal>,
    pub total: Option<Decimal>,
}

impl Lines {
    pub fn is_complete(&self) -> bool {
        self.spread.is_some() && self.total.is_some()
    }
}

/// Client for The Odds API
#[derive(Clone)]
pub struct OddsApiClient {
    client: Client,
    config: OddsApiConfig,
}

impl OddsApiClient {
    pub fn new(config: OddsApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Share an existing connection pool.
    pub fn with_client(client: Client, config: OddsApiConfig) -> Self {
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Raw odds listing for the configured sport.
    pub async fn list_odds(&self) -> Result<Vec<OddsEvent>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Odds API key not configured"))?;

        let url = format!(
            "{}/v4/sports/{}/odds",
            self.config.base_url.trim_end_matches('/'),
            self.config.sport
        );
        debug!("Odds request: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("apiKey", api_key),
                ("regions", self.config.regions.as_str()),
                ("markets", self.config.markets.as_str()),
                ("oddsFormat", self.config.odds_format.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        debug!("Odds response status: {}", status);

        let response_text = response.text().await?;
        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "odds request failed with status {}: {}",
                status,
                response_text
            ));
        }

        let events: Vec<OddsEvent> = serde_json::from_str(&response_text)?;
        debug!("Odds response: {} events", events.len());
        Ok(events)
    }

    /// Games with lines, or an empty list when the key is missing or the
    /// request fails for any reason.
    pub async fn fetch_games(&self, now: DateTime<Utc>) -> Vec<Game> {
        if !self.is_configured() {
            debug!("Odds API key not configured, skipping odds");
            return Vec::new();
        }

        match self.list_odds().await {
            Ok(events) => events
                .iter()
                .enumerate()
                .map(|(index, event)| game_from_event(index, event, now))
                .collect(),
            Err(e) => {
                warn!("Odds API error: {}", e);
                Vec::new()
            }
        }
    }
}

/// Scan bookmakers in order; each field takes the first value any bookmaker
/// offers, so spread and total may come from different books.
pub fn extract_lines(event: &OddsEvent) -> Lines {
    let mut lines = Lines::default();

    for book in &event.bookmakers {
        if lines.spread.is_none() {
            lines.spread = book
                .market(SPREADS_MARKET)
                .and_then(|m| m.outcome(&event.home_team))
                .and_then(|o| o.point);
        }
        if lines.total.is_none() {
            lines.total = book
                .market(TOTALS_MARKET)
                .and_then(|m| m.outcome(OVER_OUTCOME))
                .and_then(|o| o.point);
        }
        if lines.is_complete() {
            break;
        }
    }

    lines
}

pub fn game_from_event(index: usize, event: &OddsEvent, now: DateTime<Utc>) -> Game {
    let lines = extract_lines(event);
    let start = event
        .commence_time
        .as_deref()
        .and_then(game_time::parse_start_time);

    Game {
        id: GameId::from_upstream(event.id.as_deref(), index),
        time: game_time::display_time(start),
        status: game_time::odds_status(start, now).to_string(),
        home: event.home_team.clone(),
        away: event.away_team.clone(),
        spread: lines.spread,
        total: lines.total,
        source: GameSource::OddsApi,
    }
}
