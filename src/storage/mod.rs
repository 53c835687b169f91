//! Persistence of the user's daily picks
//!
//! Picks live in a key-value store, one key per calendar day:
//! `players.picks.<yyyy-MM-dd>` maps to the picked [`Player`] as JSON.
//! - `models`: pick records and key formatting
//! - `schema`: SQLite connection and table management
//! - `queries`: the SQLite [`PickStore`] implementation
//! - `memory`: an in-memory [`PickStore`] for tests and dry runs

pub mod memory;
pub mod models;
pub mod queries;
pub mod schema;


pub use memory::InMemoryPickStore;
pub use models::*;
pub use schema::PickDatabase;

use tracing::warn;

use crate::{
    bdl::types::Player,
    cli::types::{GameDay, PlayerId},
    core::{season_start, ELIGIBILITY_WINDOW_DAYS},
    Result,
};
use std::collections::HashSet;

/// Key-value storage for picks.
///
/// Backends implement the three raw operations; the pick operations are
/// provided on top of them so every backend formats keys and decodes values
/// the same way. Entries that fail to decode are skipped.
pub trait PickStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a single key.
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// All entries with `from <= key <= to`, ascending by key.
    fn scan(&self, from: &str, to: &str) -> Result<Vec<(String, String)>>;

    fn save_pick(&self, player: &Player, day: GameDay) -> Result<()> {
        let value = serde_json::to_string(player)?;
        self.put(&pick_key(day), &value)
    }

    fn fetch_pick(&self, day: GameDay) -> Result<Option<Player>> {
        let key = pick_key(day);
        Ok(self
            .get(&key)?
            .and_then(|value| decode_player(&key, &value)))
    }

    /// Picks from the eligibility window ending on `day` (inclusive), oldest first.
    fn fetch_recent_picks(&self, day: GameDay) -> Result<Vec<PlayerPick>> {
        let from = day.days_before(ELIGIBILITY_WINDOW_DAYS - 1);
        self.fetch_picks_between(from, day)
    }

    /// Every pick from `from` through `to` inclusive, oldest first.
    fn fetch_picks_between(&self, from: GameDay, to: GameDay) -> Result<Vec<PlayerPick>> {
        let entries = self.scan(&pick_key(from), &pick_key(to))?;
        Ok(entries
            .into_iter()
            .filter_map(|(key, value)| {
                let day = parse_pick_key(&key)?;
                let player = decode_player(&key, &value)?;
                Some(PlayerPick { player, day })
            })
            .collect())
    }

    /// Distinct players picked since the season started, most recent pick first.
    fn fetch_season_players(&self, day: GameDay) -> Result<Vec<Player>> {
        let picks = self.fetch_picks_between(season_start(), day)?;
        let mut seen: HashSet<PlayerId> = HashSet::new();
        Ok(picks
            .into_iter()
            .rev()
            .filter(|pick| seen.insert(pick.player.id))
            .map(|pick| pick.player)
            .collect())
    }
}

fn decode_player(key: &str, value: &str) -> Option<Player> {
    match serde_json::from_str(value) {
        Ok(player) => Some(player),
        Err(e) => {
            warn!(key, error = %e, "skipping undecodable pick");
            None
        }
    }
}
