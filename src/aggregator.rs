use crate::config::Config;
use crate::dto::today::{Game, GameSource, Sources, TodayResponse};
use crate::game_time;
use crate::odds_client::OddsApiClient;
use crate::sportradar_client::SportradarClient;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, info};

/// Source of the `/api/today` body. An `Err` here is an orchestration
/// failure and is reported as HTTP 500.
#[async_trait]
pub trait TodayFeed: Send + Sync {
    async fn build_today(&self) -> Result<TodayResponse>;
}

/// Builds the combined games/odds/injuries payload.
///
/// Each call makes fresh upstream requests. The odds provider is tried first;
/// the Sportradar schedule is only requested when it yields no games. The
/// injury report is fetched concurrently with that decision. Upstream failures
/// shrink the payload, they never fail the call.
#[derive(Clone)]
pub struct Aggregator {
    odds: OddsApiClient,
    sportradar: SportradarClient,
}

impl Aggregator {
    pub fn new(odds: OddsApiClient, sportradar: SportradarClient) -> Self {
        Self { odds, sportradar }
    }

    /// Both clients share one connection pool.
    pub fn from_config(config: &Config) -> Self {
        let client = Client::new();
        Self::new(
            OddsApiClient::with_client(client.clone(), config.odds.clone()),
            SportradarClient::with_client(client, config.sportradar.clone()),
        )
    }

    pub fn sources(&self) -> Sources {
        Sources::new(self.odds.is_configured(), self.sportradar.is_configured())
    }

    pub async fn today(&self) -> TodayResponse {
        self.today_at(Utc::now()).await
    }

    pub async fn today_at(&self, now: DateTime<Utc>) -> TodayResponse {
        let (games, injuries) = tokio::join!(self.games_at(now), self.sportradar.fetch_injuries());

        let response = TodayResponse::new(game_time::iso_date(now), games, injuries, self.sources());
        info!(
            "Today: {} games (odds: {}), {} teams with injuries",
            response.games_count,
            response.has_odds,
            response.injuries.len()
        );
        response
    }

    async fn games_at(&self, now: DateTime<Utc>) -> Vec<Game> {
        let games = self.odds.fetch_games(now).await;
        if !games.is_empty() {
            debug!("Using {} games from {:?}", games.len(), GameSource::OddsApi);
            return games;
        }

        if !self.sportradar.is_configured() {
            return games;
        }

        let date = game_time::local_schedule_date(now);
        debug!("No odds games, falling back to Sportradar schedule for {}", date);
        self.sportradar.fetch_schedule_games(date).await
    }
}

#[async_trait]
impl TodayFeed for Aggregator {
    async fn build_today(&self) -> Result<TodayResponse> {
        Ok(self.today().await)
    }
}
