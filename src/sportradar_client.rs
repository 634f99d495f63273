use crate::config::SportradarConfig;
use crate::dto::sportradar::{DailySchedule, LeagueInjuries, ScheduledGame, TeamRef};
use crate::dto::today::{Game, GameId, GameSource, Injuries, InjuryEntry, UNKNOWN_INJURY_STATUS};
use crate::game_time;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Client for the Sportradar NBA API: daily schedules and the league
/// injury report.
#[derive(Clone)]
pub struct SportradarClient {
    client: Client,
    config: SportradarConfig,
}

impl SportradarClient {
    pub fn new(config: SportradarConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: SportradarConfig) -> Self {
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/nba/{}/{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.access_level,
            self.config.version,
            self.config.language,
            path
        )
    }

    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Sportradar key not configured"))?;

        let url = self.endpoint(path);
        debug!("Sportradar request: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", api_key)])
            .send()
            .await?;

        let status = response.status();
        debug!("Sportradar response status: {}", status);

        let response_text = response.text().await?;
        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "Sportradar request {} failed with status {}: {}",
                path,
                status,
                response_text
            ));
        }

        Ok(serde_json::from_str(&response_text)?)
    }

    // ========================================================================
    // Schedule
    // ========================================================================

    pub async fn daily_schedule(&self, date: NaiveDate) -> Result<DailySchedule> {
        let path = format!(
            "games/{}/{:02}/{:02}/schedule.json",
            date.year(),
            date.month(),
            date.day()
        );
        self.get_json(&path).await
    }

    /// Schedule for `date` without lines; empty on any failure.
    pub async fn fetch_schedule_games(&self, date: NaiveDate) -> Vec<Game> {
        if !self.is_configured() {
            debug!("Sportradar key not configured, skipping schedule");
            return Vec::new();
        }

        match self.daily_schedule(date).await {
            Ok(schedule) => {
                debug!("Sportradar schedule for {}: {} games", date, schedule.games.len());
                schedule
                    .games
                    .iter()
                    .enumerate()
                    .map(|(index, game)| game_from_schedule(index, game))
                    .collect()
            }
            Err(e) => {
                warn!("Sportradar error: {}", e);
                Vec::new()
            }
        }
    }

    // ========================================================================
    // Injuries
    // ========================================================================

    pub async fn league_injuries(&self) -> Result<LeagueInjuries> {
        self.get_json("league/injuries.json").await
    }

    /// Injury report by team; empty on any failure.
    pub async fn fetch_injuries(&self) -> Injuries {
        if !self.is_configured() {
            debug!("Sportradar key not configured, skipping injuries");
            return Injuries::new();
        }

        match self.league_injuries().await {
            Ok(report) => injuries_by_team(&report),
            Err(e) => {
                warn!("Injuries error: {}", e);
                Injuries::new()
            }
        }
    }
}

pub fn game_from_schedule(index: usize, game: &ScheduledGame) -> Game {
    let start = game
        .scheduled
        .as_deref()
        .and_then(game_time::parse_start_time);

    Game {
        id: GameId::from_upstream(game.id.as_deref(), index),
        time: game_time::display_time(start),
        status: game.status.clone().unwrap_or_default(),
        home: team_name(game.home.as_ref()),
        away: team_name(game.away.as_ref()),
        spread: None,
        total: None,
        source: GameSource::Sportradar,
    }
}

fn team_name(team: Option<&TeamRef>) -> String {
    team.and_then(TeamRef::display_name)
        .unwrap_or_default()
        .to_string()
}

pub fn injuries_by_team(report: &LeagueInjuries) -> Injuries {
    let mut injuries = Injuries::new();

    for team in &report.teams {
        let Some(team_name) = team.team.display_name() else {
            debug!("Skipping injury entry for team without a name or alias");
            continue;
        };

        let entries = team
            .players
            .iter()
            .map(|p| InjuryEntry {
                name: p.full_name.clone().unwrap_or_default(),
                position: p.position.clone(),
                status: p
                    .injury
                    .as_ref()
                    .and_then(|i| i.status.as_deref())
                    .filter(|s| !s.is_empty())
                    .unwrap_or(UNKNOWN_INJURY_STATUS)
                    .to_string(),
            })
            .collect();

        injuries.insert(team_name.to_string(), entries);
    }

    injuries
}
