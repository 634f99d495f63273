pub mod line_serde;
pub mod odds;
pub mod sportradar;
pub mod today;

// Re-export commonly used types for convenience
pub use odds::{Bookmaker, Market, OddsEvent, Outcome};
pub use sportradar::{
    DailySchedule, InjuredPlayer, InjuredTeam, InjuryDetail, LeagueInjuries, ScheduledGame,
    TeamRef,
};
pub use today::{Game, GameId, GameSource, Injuries, InjuryEntry, Sources, TodayResponse};
