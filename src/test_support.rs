//! Builders and fakes shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    bdl::{
        types::{Game, Games, Meta, Player, PlayerStats, Players, StatsGame, StatsPage, StatsPlayer, Team},
        StatsApi,
    },
    cli::types::{GameDay, GameId, PlayerId, TeamId},
    CarotError, Result,
};

pub fn team(id: u64, name: &str) -> Team {
    Team {
        id: TeamId::new(id),
        name: name.to_string(),
        full_name: format!("City {}", name),
    }
}

pub fn player(id: u64, first: &str, last: &str, team: &Team) -> Player {
    Player {
        id: PlayerId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        position: "G".to_string(),
        team: team.clone(),
    }
}

pub fn game(id: u64, home: &Team, home_score: u32, visitor: &Team, visitor_score: u32) -> Game {
    Game {
        id: GameId::new(id),
        status: "Final".to_string(),
        home_team: home.clone(),
        visitor_team: visitor.clone(),
        home_team_score: home_score,
        visitor_team_score: visitor_score,
    }
}

/// A stats row whose score equals `points` (every other counter is zero).
pub fn stat_line(id: u64, team: &Team, player_id: Option<u64>, points: u32) -> PlayerStats {
    PlayerStats {
        id,
        game: StatsGame { id: GameId::new(1) },
        player: player_id.map(|pid| StatsPlayer {
            id: PlayerId::new(pid),
            first_name: format!("First{}", pid),
            last_name: format!("Last{}", pid),
            position: "F".to_string(),
            team_id: team.id,
        }),
        team: team.clone(),
        minutes: "30".to_string(),
        points,
        rebounds: 0,
        assists: 0,
        blocks: 0,
        steals: 0,
        field_goals_made: 0,
        field_goals_attempted: 0,
        field_goals_percentage: None,
        three_pointers_made: 0,
        three_pointers_attempted: 0,
        three_pointers_percentage: None,
        free_throws_made: 0,
        free_throws_attempted: 0,
        free_throws_percentage: None,
        turnovers: 0,
        personal_fouls: 0,
    }
}

pub fn stats_page(rows: Vec<PlayerStats>, current_page: u32, next_page: Option<u32>) -> StatsPage {
    StatsPage {
        data: rows,
        meta: Meta {
            current_page,
            next_page,
            per_page: 100,
        },
    }
}

pub fn page_of<T>(data: Vec<T>) -> crate::bdl::types::Page<T> {
    crate::bdl::types::Page {
        data,
        meta: Meta {
            current_page: 1,
            next_page: None,
            per_page: 25,
        },
    }
}

/// Recorded request made against [`ScriptedStatsApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Games(GameDay),
    Stats(Vec<GameId>, u32),
    Search(String),
}

/// In-memory [`StatsApi`] answering from scripted responses.
#[derive(Default)]
pub struct ScriptedStatsApi {
    pub games: HashMap<GameDay, Vec<Game>>,
    pub games_delay: HashMap<GameDay, Duration>,
    pub stats_pages: HashMap<u32, StatsPage>,
    pub failing_stats_pages: Vec<u32>,
    pub players: HashMap<String, Vec<Player>>,
    pub search_delay: HashMap<String, Duration>,
    pub calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedStatsApi {
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl StatsApi for ScriptedStatsApi {
    async fn fetch_date_games(&self, day: GameDay) -> Result<Games> {
        self.record(ApiCall::Games(day));
        if let Some(delay) = self.games_delay.get(&day) {
            tokio::time::sleep(*delay).await;
        }
        match self.games.get(&day) {
            Some(games) => Ok(page_of(games.clone())),
            None => Err(CarotError::Storage {
                message: format!("no scripted games for {}", day),
            }),
        }
    }

    async fn fetch_games_stats(&self, game_ids: &[GameId], page: u32) -> Result<StatsPage> {
        self.record(ApiCall::Stats(game_ids.to_vec(), page));
        if self.failing_stats_pages.contains(&page) {
            return Err(CarotError::Storage {
                message: format!("scripted failure on page {}", page),
            });
        }
        Ok(self
            .stats_pages
            .get(&page)
            .cloned()
            .unwrap_or_else(|| stats_page(Vec::new(), page, None)))
    }

    async fn search_players(&self, query: &str) -> Result<Players> {
        self.record(ApiCall::Search(query.to_string()));
        if let Some(delay) = self.search_delay.get(query) {
            tokio::time::sleep(*delay).await;
        }
        Ok(page_of(self.players.get(query).cloned().unwrap_or_default()))
    }
}
