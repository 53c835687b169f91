//! Fantasy scoring for box scores
//!
//! - `compute`: the per-player score formula and its line-by-line breakdown
//! - `ranking`: attributing rows to games, ranking, and per-game best picks

pub mod compute;
pub mod ranking;

pub use compute::{compute_score, ScoreBreakdown};
pub use ranking::{
    assign_best_picks, build_player_score, find_pick, rank_and_accumulate, team_scores,
    top_n, top_three, GameScore, MyPick, PlayerScore, ScoreLine, TeamsBestPicks,
};
