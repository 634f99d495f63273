use serde::{Deserialize, Serialize};

/// Team reference as it appears in schedules and injury reports.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl TeamRef {
    /// Full team name, falling back to the short alias.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.name.as_deref()).or_else(|| non_empty(self.alias.as_deref()))
    }
}

/// `GET /nba/{access_level}/{version}/{lang}/games/{yyyy}/{mm}/{dd}/schedule.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DailySchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScheduledGame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<TeamRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away: Option<TeamRef>,
}

/// `GET /nba/{access_level}/{version}/{lang}/league/injuries.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeagueInjuries {
    #[serde(default)]
    pub teams: Vec<InjuredTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InjuredTeam {
    #[serde(flatten)]
    pub team: TeamRef,
    #[serde(default)]
    pub players: Vec<InjuredPlayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InjuredPlayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury: Option<InjuryDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InjuryDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
