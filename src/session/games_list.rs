//! The daily games list.
//!
//! Loading a day goes `Idle -> LoadingGames -> LoadingStats { page } ->
//! Ready`. Stats pages are requested strictly one after another and each
//! page is merged and re-ranked before the next request. A failure at any
//! step is logged and the session settles in `Ready` with whatever was
//! merged so far.
//!
//! Each load carries a generation number. Changing the day or starting a
//! new load bumps it, and every merge checks it first, so results for a
//! day the user already left are dropped.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::{
    bdl::{types::Player, StatsApi},
    cli::types::{GameDay, GameId},
    error::{CarotError, Result},
    scoring::{
        assign_best_picks, build_player_score, find_pick, rank_and_accumulate, team_scores,
        top_n, top_three, GameScore, MyPick, PlayerScore,
    },
    session::{
        my_pick::{check_pickable, MyPickSession},
        navigation::{Destination, GameDetail, MyPickRequest, Top25},
    },
    storage::PickStore,
};


pub const TOP_LIST_SIZE: usize = 25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum LoadPhase {
    #[default]
    Idle,
    LoadingGames,
    LoadingStats {
        page: u32,
    },
    Ready,
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::LoadingGames | LoadPhase::LoadingStats { .. })
    }
}

/// Snapshot of the games list.
#[derive(Debug, Clone, Serialize)]
pub struct GamesListState {
    pub date: GameDay,
    pub games: Vec<GameScore>,
    pub phase: LoadPhase,
    pub player_scores: Vec<PlayerScore>,
    pub my_pick: MyPick,
    pub destination: Option<Destination>,
    #[serde(skip)]
    generation: u64,
}

impl GamesListState {
    fn new(date: GameDay) -> Self {
        Self {
            date,
            games: Vec::new(),
            phase: LoadPhase::Idle,
            player_scores: Vec::new(),
            my_pick: MyPick::None,
            destination: None,
            generation: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn top_three(&self) -> &[PlayerScore] {
        top_three(&self.player_scores)
    }
}

pub struct GamesListSession {
    api: Arc<dyn StatsApi>,
    store: Arc<dyn PickStore>,
    state: Mutex<GamesListState>,
}

impl GamesListSession {
    pub fn new(api: Arc<dyn StatsApi>, store: Arc<dyn PickStore>, date: GameDay) -> Self {
        Self {
            api,
            store,
            state: Mutex::new(GamesListState::new(date)),
        }
    }

    fn state(&self) -> MutexGuard<'_, GamesListState> {
        // a panic mid-update leaves plain data behind; keep serving it
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> GamesListState {
        self.state().clone()
    }

    pub fn date(&self) -> GameDay {
        self.state().date
    }

    /// Move to `date`, invalidating any load in flight.
    ///
    /// Games, scores and the pick belong to the day they were loaded for and
    /// are cleared on a change of day, so a failed load shows an empty day.
    pub fn set_date(&self, date: GameDay) {
        let mut state = self.state();
        if state.date != date {
            state.games.clear();
            state.player_scores.clear();
            state.my_pick = MyPick::None;
            state.destination = None;
        }
        state.date = date;
        state.generation += 1;
    }

    pub async fn previous_day(&self) {
        let date = self.date().days_before(1);
        self.set_date(date);
        self.fetch_games().await;
    }

    pub async fn next_day(&self) {
        let date = self.date().days_after(1);
        self.set_date(date);
        self.fetch_games().await;
    }

    /// Load the current day: games, the stored pick, then every stats page.
    pub async fn fetch_games(&self) {
        let (day, generation) = {
            let mut state = self.state();
            state.generation += 1;
            state.phase = LoadPhase::LoadingGames;
            (state.date, state.generation)
        };

        let response = match self.api.fetch_date_games(day).await {
            Ok(response) => response,
            Err(e) => {
                error!(%day, error = %e, "failed to fetch games");
                self.settle(generation);
                return;
            }
        };

        let my_pick = match self.store.fetch_pick(day) {
            Ok(Some(player)) => MyPick::Picked(player),
            Ok(None) => MyPick::None,
            Err(e) => {
                warn!(%day, error = %e, "failed to read stored pick");
                MyPick::None
            }
        };

        {
            let mut state = self.state();
            if state.generation != generation {
                debug!(%day, "discarding games for a superseded load");
                return;
            }
            state.games = response.data.iter().map(GameScore::from).collect();
            state.player_scores.clear();
            state.my_pick = my_pick;
            info!(%day, games = state.games.len(), "games loaded");
        }

        self.fetch_games_stats(generation).await;
    }

    fn settle(&self, generation: u64) {
        let mut state = self.state();
        if state.generation == generation {
            state.phase = LoadPhase::Ready;
        }
    }

    async fn fetch_games_stats(&self, generation: u64) {
        let games = {
            let state = self.state();
            if state.generation != generation {
                return;
            }
            state.games.clone()
        };
        let game_ids: Vec<GameId> = games.iter().map(|g| g.id).collect();

        if game_ids.is_empty() {
            self.settle(generation);
            return;
        }

        let mut page = 1;
        loop {
            {
                let mut state = self.state();
                if state.generation != generation {
                    return;
                }
                state.phase = LoadPhase::LoadingStats { page };
            }

            let response = match self.api.fetch_games_stats(&game_ids, page).await {
                Ok(response) => response,
                Err(e) => {
                    error!(page, error = %e, "failed to fetch stats page");
                    self.settle(generation);
                    return;
                }
            };

            let rows = response.data.len();
            let scored: Vec<PlayerScore> = response
                .data
                .into_iter()
                .filter_map(|stats| build_player_score(stats, &games))
                .collect();
            if scored.len() < rows {
                debug!(page, dropped = rows - scored.len(), "rows without a matching game");
            }

            let mut guard = self.state();
            let state = &mut *guard;
            if state.generation != generation {
                debug!(page, "discarding stats for a superseded load");
                return;
            }
            rank_and_accumulate(&mut state.player_scores, scored);
            assign_best_picks(&mut state.games, &state.player_scores);

            match response.meta.next_page {
                Some(next) if next > page => page = next,
                next => {
                    if let Some(next) = next {
                        warn!(page, next, "ignoring non-increasing next page");
                    }
                    state.phase = LoadPhase::Ready;
                    if let Some(player) = state.my_pick.player().cloned() {
                        state.my_pick = find_pick(player, &state.player_scores);
                    }
                    info!(scores = state.player_scores.len(), "stats loaded");
                    return;
                }
            }
        }
    }

    pub fn game_detail_tapped(&self, game_id: GameId) -> Result<()> {
        let mut state = self.state();
        let game = state
            .games
            .iter()
            .find(|g| g.id == game_id)
            .cloned()
            .ok_or(CarotError::GameNotFound {
                game_id: game_id.as_u64(),
            })?;
        state.destination = Some(Destination::GameDetail(GameDetail {
            visitor_scores: team_scores(&state.player_scores, game.visitor_team.id),
            home_scores: team_scores(&state.player_scores, game.home_team.id),
            my_pick_score: state.my_pick.player_score().cloned(),
            player_detail: None,
            game,
        }));
        Ok(())
    }

    pub fn player_detail_tapped(&self, score: PlayerScore) {
        self.state().destination = Some(Destination::PlayerDetail(score));
    }

    /// Open a player's detail on top of the game detail or top list.
    ///
    /// Returns `false` when neither is showing.
    pub fn nested_player_detail_tapped(&self, score: PlayerScore) -> bool {
        match self.state().destination.as_mut() {
            Some(Destination::GameDetail(detail)) => detail.player_detail_tapped(score),
            Some(Destination::Top25(top)) => top.player_detail_tapped(score),
            _ => return false,
        }
        true
    }

    /// Close the nested player detail, leaving its parent open.
    pub fn nested_player_detail_dismissed(&self) {
        match self.state().destination.as_mut() {
            Some(Destination::GameDetail(detail)) => detail.player_detail_dismissed(),
            Some(Destination::Top25(top)) => top.player_detail_dismissed(),
            _ => {}
        }
    }

    /// Open the top list; does nothing until enough scores are in.
    pub fn view_top25_tapped(&self) -> bool {
        let mut state = self.state();
        let Some(scores) = top_n(&state.player_scores, TOP_LIST_SIZE).map(<[_]>::to_vec) else {
            return false;
        };
        state.destination = Some(Destination::Top25(Top25 {
            scores,
            my_pick_score: state.my_pick.player_score().cloned(),
            player_detail: None,
        }));
        true
    }

    pub fn my_pick_tapped(&self) -> MyPickRequest {
        let mut state = self.state();
        let request = MyPickRequest {
            date: state.date,
            games: state.games.clone(),
        };
        state.destination = Some(Destination::MyPick(request.clone()));
        request
    }

    /// Open the pick sheet and build its session.
    pub fn open_my_pick(&self, debounce: Duration) -> MyPickSession {
        let request = self.my_pick_tapped();
        MyPickSession::new(
            self.api.clone(),
            self.store.clone(),
            request.date,
            request.games,
            debounce,
        )
    }

    /// Record `player` as the pick for the current day and close the sheet.
    ///
    /// Players still inside their thirty-day window are refused and the
    /// sheet stays open.
    pub fn my_pick_player_picked(&self, player: Player) -> Result<()> {
        let date = self.date();
        check_pickable(self.store.as_ref(), &player, date)?;
        self.store.save_pick(&player, date)?;
        info!(%date, player = %player.display_name(), "pick saved");

        let mut state = self.state();
        if state.date == date {
            state.my_pick = find_pick(player, &state.player_scores);
        }
        state.destination = None;
        Ok(())
    }

    /// Close whatever the list points to.
    pub fn dismiss(&self) {
        self.state().destination = None;
    }
}
