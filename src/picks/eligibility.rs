use serde::Serialize;

use crate::{
    bdl::types::Player,
    cli::types::{GameDay, PlayerId},
    core::ELIGIBILITY_WINDOW_DAYS,
    scoring::GameScore,
    storage::PlayerPick,
};


/// `picked` blocks `as_of` when it is 0 to 29 days earlier.
fn blocks(picked: GameDay, as_of: GameDay) -> bool {
    (0..ELIGIBILITY_WINDOW_DAYS).contains(&as_of.days_since(picked))
}

/// Most recent pick of `player_id` that still blocks `as_of`.
fn blocking_pick(player_id: PlayerId, history: &[PlayerPick], as_of: GameDay) -> Option<GameDay> {
    history
        .iter()
        .filter(|pick| pick.player.id == player_id && blocks(pick.day, as_of))
        .map(|pick| pick.day)
        .max()
}

/// Whether `player_id` may be picked on `as_of`. Never-picked players are eligible.
pub fn is_eligible(player_id: PlayerId, history: &[PlayerPick], as_of: GameDay) -> bool {
    blocking_pick(player_id, history, as_of).is_none()
}

/// First day `player_id` can be picked again, or `None` if eligible on `as_of`.
pub fn unavailable_until(
    player_id: PlayerId,
    history: &[PlayerPick],
    as_of: GameDay,
) -> Option<GameDay> {
    blocking_pick(player_id, history, as_of).map(|day| day.days_after(ELIGIBILITY_WINDOW_DAYS))
}

/// A previously picked player who is eligible and plays on the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailablePick {
    pub player: Player,
    pub opponent: String,
    pub is_playing_on_the_road: bool,
}

/// Past picks worth picking again today.
///
/// Keeps the players from `season_players` whose team plays one of `games`
/// and who are not blocked by `recent_picks`, annotated with the opponent,
/// sorted by last name.
pub fn available_past_picks(
    season_players: Vec<Player>,
    games: &[GameScore],
    recent_picks: &[PlayerPick],
    as_of: GameDay,
) -> Vec<AvailablePick> {
    let mut available: Vec<AvailablePick> = season_players
        .into_iter()
        .filter(|player| is_eligible(player.id, recent_picks, as_of))
        .filter_map(|player| {
            let game = games.iter().find(|g| g.involves(player.team.id))?;
            let is_playing_on_the_road = game.visitor_team.id == player.team.id;
            let opponent = if is_playing_on_the_road {
                game.home_team.name.clone()
            } else {
                game.visitor_team.name.clone()
            };
            Some(AvailablePick {
                player,
                opponent,
                is_playing_on_the_road,
            })
        })
        .collect();

    available.sort_by(|a, b| a.player.last_name.cmp(&b.player.last_name));
    available
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Availability {
    Available,
    Unavailable { picked_on: GameDay },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }

    /// Day the player becomes pickable again.
    pub fn available_on(&self) -> Option<GameDay> {
        match self {
            Availability::Available => None,
            Availability::Unavailable { picked_on } => {
                Some(picked_on.days_after(ELIGIBILITY_WINDOW_DAYS))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub player: Player,
    pub availability: Availability,
}

pub fn availability(player_id: PlayerId, recent_picks: &[PlayerPick], as_of: GameDay) -> Availability {
    match blocking_pick(player_id, recent_picks, as_of) {
        Some(picked_on) => Availability::Unavailable { picked_on },
        None => Availability::Available,
    }
}

/// Tag each search hit with its availability on `as_of`, keeping API order.
pub fn search_availability(
    players: Vec<Player>,
    recent_picks: &[PlayerPick],
    as_of: GameDay,
) -> Vec<SearchResult> {
    players
        .into_iter()
        .map(|player| SearchResult {
            availability: availability(player.id, recent_picks, as_of),
            player,
        })
        .collect()
}
