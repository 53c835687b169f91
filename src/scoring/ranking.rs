//! Turning a day's stats rows into ranked player scores.
//!
//! Rows arrive page by page. Each row is attributed to the day's game its
//! team plays in, scored, appended to the running list and the whole list is
//! re-sorted. The sort is stable so equal scores keep their arrival order
//! across pages. After every merge the best pick of each side of each game is
//! recomputed from the ranked list.

use serde::Serialize;

use crate::{
    bdl::types::{Game, Player, PlayerStats},
    cli::types::{GameId, PlayerId, TeamId},
    core::format_status,
    scoring::compute::{compute_score, ScoreBreakdown},
};

#[cfg(test)]
mod tests;

/// Opponent and game score seen from the player's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreLine {
    pub opponent_name: String,
    pub score: String,
}

/// A scored box score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerScore {
    /// Id of the underlying stats row.
    pub id: u64,
    pub stats: PlayerStats,
    pub game: ScoreLine,
    pub score: i64,
}

impl PlayerScore {
    /// Team this score counts for when picking per-team leaders.
    pub fn team_id(&self) -> Option<TeamId> {
        self.stats.player_team_id()
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        self.stats.player_id()
    }

    pub fn display_name(&self) -> String {
        self.stats.display_name()
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown::from_stats(&self.stats)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameTeam {
    pub id: TeamId,
    pub name: String,
    pub score: u32,
}

/// Highest ranked player of each side; `None` when nobody is attributed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamsBestPicks {
    pub visitor: Option<PlayerScore>,
    pub home: Option<PlayerScore>,
}

impl TeamsBestPicks {
    pub fn is_empty(&self) -> bool {
        self.visitor.is_none() && self.home.is_none()
    }
}

/// A game as shown in the daily list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameScore {
    pub id: GameId,
    pub status: String,
    pub visitor_team: GameTeam,
    pub home_team: GameTeam,
    pub best_picks: TeamsBestPicks,
}

impl From<&Game> for GameScore {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            status: game.status.clone(),
            visitor_team: GameTeam {
                id: game.visitor_team.id,
                name: game.visitor_team.name.clone(),
                score: game.visitor_team_score,
            },
            home_team: GameTeam {
                id: game.home_team.id,
                name: game.home_team.name.clone(),
                score: game.home_team_score,
            },
            best_picks: TeamsBestPicks::default(),
        }
    }
}

impl GameScore {
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team.id == team_id || self.visitor_team.id == team_id
    }

    /// `visitor - home`, the way the scoreboard reads.
    pub fn scoreboard(&self) -> String {
        format!("{} - {}", self.visitor_team.score, self.home_team.score)
    }

    pub fn status_display(&self) -> String {
        format_status(&self.status)
    }
}

/// Score a stats row against the day's games.
///
/// Returns `None` when the row's team plays in none of `games`; such rows
/// cannot be attributed and are dropped. The score string lists the
/// subject's own team first: `home - visitor` for the home side,
/// `visitor - home` otherwise.
pub fn build_player_score(stats: PlayerStats, games: &[GameScore]) -> Option<PlayerScore> {
    let team_id = stats.team.id;
    let game = games.iter().find(|g| g.involves(team_id))?;

    let game_line = if team_id == game.home_team.id {
        ScoreLine {
            opponent_name: game.visitor_team.name.clone(),
            score: format!("{} - {}", game.home_team.score, game.visitor_team.score),
        }
    } else {
        ScoreLine {
            opponent_name: game.home_team.name.clone(),
            score: format!("{} - {}", game.visitor_team.score, game.home_team.score),
        }
    };

    Some(PlayerScore {
        id: stats.id,
        score: compute_score(&stats),
        game: game_line,
        stats,
    })
}

/// Merge a new page into the running ranking, highest score first.
pub fn rank_and_accumulate(ranked: &mut Vec<PlayerScore>, page: Vec<PlayerScore>) {
    ranked.extend(page);
    // sort_by is stable: ties keep arrival order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Recompute every game's per-side leader from the ranked list.
pub fn assign_best_picks(games: &mut [GameScore], ranked: &[PlayerScore]) {
    let leader = |team_id: TeamId| {
        ranked
            .iter()
            .find(|s| s.team_id() == Some(team_id))
            .cloned()
    };
    for game in games.iter_mut() {
        game.best_picks = TeamsBestPicks {
            visitor: leader(game.visitor_team.id),
            home: leader(game.home_team.id),
        };
    }
}

/// The podium, only shown once three scores exist.
pub fn top_three(ranked: &[PlayerScore]) -> &[PlayerScore] {
    if ranked.len() > 2 {
        &ranked[..3]
    } else {
        &[]
    }
}

/// The first `n` scores, or `None` until at least `n` are available.
pub fn top_n(ranked: &[PlayerScore], n: usize) -> Option<&[PlayerScore]> {
    (ranked.len() >= n).then(|| &ranked[..n])
}

/// One team's scores in ranking order.
pub fn team_scores(ranked: &[PlayerScore], team_id: TeamId) -> Vec<PlayerScore> {
    ranked
        .iter()
        .filter(|s| s.team_id() == Some(team_id))
        .cloned()
        .collect()
}

/// The user's pick for the day, resolved against the scores when possible.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum MyPick {
    #[default]
    None,
    Picked(Player),
    Score(PlayerScore),
}

impl MyPick {
    pub fn player(&self) -> Option<&Player> {
        match self {
            MyPick::Picked(player) => Some(player),
            _ => None,
        }
    }

    pub fn player_score(&self) -> Option<&PlayerScore> {
        match self {
            MyPick::Score(score) => Some(score),
            _ => None,
        }
    }

    /// Whether `score` is the row the user picked.
    pub fn is(&self, score: &PlayerScore) -> bool {
        self.player_score().is_some_and(|s| s.id == score.id)
    }
}

pub fn find_pick(player: Player, ranked: &[PlayerScore]) -> MyPick {
    match ranked.iter().find(|s| s.player_id() == Some(player.id)) {
        Some(score) => MyPick::Score(score.clone()),
        None => MyPick::Picked(player),
    }
}
