//! Data models for the storage layer

use crate::{bdl::types::Player, cli::types::GameDay};
use serde::{Deserialize, Serialize};

pub const PICK_KEY_PREFIX: &str = "players.picks.";

/// Key under which the pick for `day` is stored.
pub fn pick_key(day: GameDay) -> String {
    format!("{}{}", PICK_KEY_PREFIX, day)
}

/// Day encoded in a pick key, if `key` is one.
pub fn parse_pick_key(key: &str) -> Option<GameDay> {
    key.strip_prefix(PICK_KEY_PREFIX)?.parse().ok()
}

/// A player picked on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPick {
    pub player: Player,
    pub day: GameDay,
}
