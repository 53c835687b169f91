//! Common utilities and helper functions shared across commands.
//!
//! This module contains shared functionality that would otherwise be duplicated
//! across different command implementations.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::{
    bdl::{HttpStatsApi, StatsApi},
    scoring::{MyPick, PlayerScore},
    session::GamesListSession,
    storage::{PickDatabase, PickStore},
    Config, GameDay, Result,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub config: Config,
    pub api: Arc<dyn StatsApi>,
    pub store: Arc<dyn PickStore>,
}

impl CommandContext {
    /// Build the HTTP client and open the pick database named by `config`
    pub fn new(config: Config) -> Result<Self> {
        let api = Arc::new(HttpStatsApi::from_config(&config)?);
        debug!(path = %config.db_path.display(), "opening pick database");
        let store = Arc::new(PickDatabase::new(&config.db_path)?);
        Ok(Self::with_backends(config, api, store))
    }

    pub fn with_backends(
        config: Config,
        api: Arc<dyn StatsApi>,
        store: Arc<dyn PickStore>,
    ) -> Self {
        Self { config, api, store }
    }

    /// Games list for `date`, fully loaded.
    pub async fn load_day(&self, date: GameDay) -> GamesListSession {
        let session = GamesListSession::new(self.api.clone(), self.store.clone(), date);
        session.fetch_games().await;
        session
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `  1. L. Doncic        42  vs Trail Blazers (120 - 110)`, starred when it is the user's pick
pub fn score_row(rank: usize, score: &PlayerScore, my_pick: &MyPick) -> String {
    let marker = if my_pick.is(score) { "*" } else { " " };
    format!(
        "{}{:>3}. {:<22} {:>4}  vs {} ({})",
        marker,
        rank,
        score.display_name(),
        score.score,
        score.game.opponent_name,
        score.game.score
    )
}

pub fn my_pick_line(my_pick: &MyPick) -> String {
    match my_pick {
        MyPick::None => "My pick: none".to_string(),
        MyPick::Picked(player) => format!("My pick: {} (no box score)", player.display_name()),
        MyPick::Score(score) => format!("My pick: {} {}", score.display_name(), score.score),
    }
}
