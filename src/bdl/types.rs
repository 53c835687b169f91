//! Wire types for the balldontlie stats API.

use crate::cli::types::{GameId, PlayerId, TeamId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;


/// Counters come back as `null` for players who did not check in.
fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

fn de_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode stats rows one at a time so a single malformed row is dropped
/// instead of failing the whole page.
fn de_lenient_rows<'de, D>(deserializer: D) -> Result<Vec<PlayerStats>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = Deserialize::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<PlayerStats>(row) {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!(error = %e, "skipping undecodable stats row");
                None
            }
        })
        .collect())
}

/// `F. Last`, or just the last name when the first name is empty.
pub fn initial_name(first_name: &str, last_name: &str) -> String {
    match first_name.chars().next() {
        Some(initial) => format!("{}. {}", initial, last_name),
        None => last_name.to_string(),
    }
}

/// Pagination block attached to every list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Meta {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub per_page: u32,
}

/// Generic `{ data, meta }` envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Meta,
}

pub type Games = Page<Game>;
pub type Players = Page<Player>;

/// Stats envelope; rows are decoded leniently.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsPage {
    #[serde(deserialize_with = "de_lenient_rows")]
    pub data: Vec<PlayerStats>,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Game {
    pub id: GameId,
    /// ISO timestamp for scheduled games, otherwise "Final", "3rd Qtr", ...
    pub status: String,
    pub home_team: Team,
    pub visitor_team: Team,
    #[serde(default, deserialize_with = "de_count")]
    pub home_team_score: u32,
    #[serde(default, deserialize_with = "de_count")]
    pub visitor_team_score: u32,
}

/// Player as returned by search and as persisted in the pick store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub position: String,
    pub team: Team,
}

impl Player {
    pub fn display_name(&self) -> String {
        initial_name(&self.first_name, &self.last_name)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Game reference inside a stats row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatsGame {
    pub id: GameId,
}

/// Player reference inside a stats row (team is given by id only).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatsPlayer {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub position: String,
    pub team_id: TeamId,
}

impl StatsPlayer {
    pub fn display_name(&self) -> String {
        initial_name(&self.first_name, &self.last_name)
    }
}

/// One player's box score for one game.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerStats {
    pub id: u64,
    pub game: StatsGame,
    /// The source occasionally returns rows without a player.
    #[serde(default)]
    pub player: Option<StatsPlayer>,
    pub team: Team,
    #[serde(rename = "min", default, deserialize_with = "de_string_or_empty")]
    pub minutes: String,
    #[serde(rename = "pts", default, deserialize_with = "de_count")]
    pub points: u32,
    #[serde(rename = "reb", default, deserialize_with = "de_count")]
    pub rebounds: u32,
    #[serde(rename = "ast", default, deserialize_with = "de_count")]
    pub assists: u32,
    #[serde(rename = "blk", default, deserialize_with = "de_count")]
    pub blocks: u32,
    #[serde(rename = "stl", default, deserialize_with = "de_count")]
    pub steals: u32,
    #[serde(rename = "fgm", default, deserialize_with = "de_count")]
    pub field_goals_made: u32,
    #[serde(rename = "fga", default, deserialize_with = "de_count")]
    pub field_goals_attempted: u32,
    #[serde(rename = "fg_pct", default)]
    pub field_goals_percentage: Option<f64>,
    #[serde(rename = "fg3m", default, deserialize_with = "de_count")]
    pub three_pointers_made: u32,
    #[serde(rename = "fg3a", default, deserialize_with = "de_count")]
    pub three_pointers_attempted: u32,
    #[serde(rename = "fg3_pct", default)]
    pub three_pointers_percentage: Option<f64>,
    #[serde(rename = "ftm", default, deserialize_with = "de_count")]
    pub free_throws_made: u32,
    #[serde(rename = "fta", default, deserialize_with = "de_count")]
    pub free_throws_attempted: u32,
    #[serde(rename = "ft_pct", default)]
    pub free_throws_percentage: Option<f64>,
    #[serde(rename = "turnover", default, deserialize_with = "de_count")]
    pub turnovers: u32,
    #[serde(rename = "pf", default, deserialize_with = "de_count")]
    pub personal_fouls: u32,
}

impl PlayerStats {
    /// Team the box-score subject plays for, when the row names a player.
    pub fn player_team_id(&self) -> Option<TeamId> {
        self.player.as_ref().map(|p| p.team_id)
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        self.player.as_ref().map(|p| p.id)
    }

    pub fn display_name(&self) -> String {
        self.player
            .as_ref()
            .map(StatsPlayer::display_name)
            .unwrap_or_else(|| "Unknown player".to_string())
    }
}
