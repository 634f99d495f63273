//! # nba-today
//!
//! HTTP service that combines tonight's NBA games, betting lines and injury
//! reports from two upstream providers into a single JSON feed.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nba_today::{Aggregator, Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Load config.toml (optional) and ODDS_API_KEY / SPORTRADAR_KEY
//! let config = Config::new()?;
//!
//! let aggregator = Aggregator::from_config(&config);
//! let today = aggregator.today().await;
//! println!("{} games, odds: {}", today.games_count, today.has_odds);
//! # Ok(())
//! # }
//! ```
//!
//! ## Sources
//!
//! - **The Odds API**: games with point spreads and totals. The first
//!   bookmaker offering each market wins.
//! - **Sportradar**: the day's schedule (used only when the odds feed has no
//!   games) and the league injury report.
//!
//! Either key may be missing. Missing keys and upstream failures produce
//! empty collections, never an error response.
//!
//! ## Configuration
//!
//! Optional `config.toml`; environment variables take precedence:
//!
//! ```toml
//! [odds]
//! api_key = "your_odds_api_key"
//!
//! [sportradar]
//! api_key = "your_sportradar_key"
//! access_level = "trial"
//!
//! [server]
//! bind = "0.0.0.0:3000"
//! ```

pub mod aggregator;
pub mod config;
pub mod diagnostics;
pub mod dto;
pub mod game_time;
pub mod odds_client;
pub mod server;
pub mod sportradar_client;

// Re-export commonly used types at the crate root
pub use aggregator::{Aggregator, TodayFeed};
pub use config::Config;
pub use dto::*;
pub use odds_client::OddsApiClient;
pub use sportradar_client::SportradarClient;
