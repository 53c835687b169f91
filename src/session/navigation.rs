//! Navigation targets of the games list.

use serde::Serialize;

use crate::{
    cli::types::GameDay,
    scoring::{GameScore, PlayerScore},
};

/// Where the games list is pointing; at most one target at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Destination {
    GameDetail(GameDetail),
    Top25(Top25),
    PlayerDetail(PlayerScore),
    MyPick(MyPickRequest),
}

/// Both rosters of one game, ranked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameDetail {
    pub game: GameScore,
    pub visitor_scores: Vec<PlayerScore>,
    pub home_scores: Vec<PlayerScore>,
    pub my_pick_score: Option<PlayerScore>,
    pub player_detail: Option<PlayerScore>,
}

impl GameDetail {
    pub fn player_detail_tapped(&mut self, score: PlayerScore) {
        self.player_detail = Some(score);
    }

    pub fn player_detail_dismissed(&mut self) {
        self.player_detail = None;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Top25 {
    pub scores: Vec<PlayerScore>,
    pub my_pick_score: Option<PlayerScore>,
    pub player_detail: Option<PlayerScore>,
}

impl Top25 {
    pub fn player_detail_tapped(&mut self, score: PlayerScore) {
        self.player_detail = Some(score);
    }

    pub fn player_detail_dismissed(&mut self) {
        self.player_detail = None;
    }
}

/// Input the pick sheet is opened with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MyPickRequest {
    pub date: GameDay,
    pub games: Vec<GameScore>,
}
