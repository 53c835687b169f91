//! Carot: a daily basketball pick game
//!
//! Each day the user picks one NBA player. The player's box score for the day
//! is turned into a single score, and a player picked once cannot be picked
//! again for thirty days.
//!
//! ## Modules
//!
//! - **bdl**: client for the balldontlie stats API (games, box scores, player search)
//! - **scoring**: the score formula, ranking across pages and per-team best picks
//! - **picks**: the thirty-day eligibility rule
//! - **storage**: key-value persistence of picks (SQLite or in memory)
//! - **session**: screen state for the games list and the pick sheet
//! - **commands**: the `carot` command-line front end
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use carot::{bdl::HttpStatsApi, session::GamesListSession, storage::PickDatabase, Config, GameDay};
//!
//! # async fn example() -> carot::Result<()> {
//! let config = Config::from_env()?;
//! let api = Arc::new(HttpStatsApi::from_config(&config)?);
//! let store = Arc::new(PickDatabase::new(&config.db_path)?);
//!
//! let session = GamesListSession::new(api, store, GameDay::today());
//! session.fetch_games().await;
//! for score in session.snapshot().top_three() {
//!     println!("{} {}", score.display_name(), score.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export BALLDONTLIE_API_KEY=your-key
//! export CAROT_DB_PATH=/tmp/picks.db
//! ```

pub mod bdl;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod picks;
pub mod scoring;
pub mod session;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use cli::types::{GameDay, GameId, PlayerId, TeamId};
pub use config::Config;
pub use error::{CarotError, Result};
