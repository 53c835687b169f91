//! The pick sheet: past picks worth repeating and a debounced player search.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::{
    bdl::{types::Player, StatsApi},
    cli::types::GameDay,
    error::{CarotError, Result},
    picks::{availability, available_past_picks, search_availability, AvailablePick, SearchResult},
    scoring::GameScore,
    session::debounce::Debouncer,
    storage::{PickStore, PlayerPick},
};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MyPickState {
    pub last_30_picks: Vec<PlayerPick>,
    pub available_past_picks: Vec<AvailablePick>,
    pub search_query: String,
    pub search_results: Vec<SearchResult>,
}

impl MyPickState {
    /// Recent picks whose name contains `query`, ignoring case.
    pub fn recent_picks_matching(&self, query: &str) -> Vec<&PlayerPick> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.last_30_picks
            .iter()
            .filter(|pick| pick.player.full_name().to_lowercase().contains(&query))
            .collect()
    }
}

pub struct MyPickSession {
    api: Arc<dyn StatsApi>,
    store: Arc<dyn PickStore>,
    date: GameDay,
    games: Vec<GameScore>,
    debouncer: Debouncer,
    state: Mutex<MyPickState>,
}

impl MyPickSession {
    pub fn new(
        api: Arc<dyn StatsApi>,
        store: Arc<dyn PickStore>,
        date: GameDay,
        games: Vec<GameScore>,
        debounce: Duration,
    ) -> Self {
        Self {
            api,
            store,
            date,
            games,
            debouncer: Debouncer::new(debounce),
            state: Mutex::new(MyPickState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, MyPickState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn date(&self) -> GameDay {
        self.date
    }

    pub fn snapshot(&self) -> MyPickState {
        self.state().clone()
    }

    /// Load the pick window and the past picks playing today.
    ///
    /// Storage failures are logged and leave the lists empty.
    pub fn on_appeared(&self) {
        let recent = self.store.fetch_recent_picks(self.date).unwrap_or_else(|e| {
            warn!(date = %self.date, error = %e, "failed to read recent picks");
            Vec::new()
        });
        let season = self
            .store
            .fetch_season_players(self.date)
            .unwrap_or_else(|e| {
                warn!(date = %self.date, error = %e, "failed to read season picks");
                Vec::new()
            });
        let available = available_past_picks(season, &self.games, &recent, self.date);
        debug!(
            recent = recent.len(),
            available = available.len(),
            "pick sheet loaded"
        );

        let mut state = self.state();
        state.last_30_picks = recent;
        state.available_past_picks = available;
    }

    /// Record the query and, once typing settles, search for it.
    ///
    /// Only the latest query's response is ever applied. An empty query
    /// sends nothing and leaves the results alone; a failed search clears
    /// them.
    pub async fn search_query_changed(&self, query: &str) {
        let ticket = self.debouncer.ticket();
        self.state().search_query = query.to_string();

        if !self.debouncer.settle(ticket).await {
            debug!(query, "search superseded before sending");
            return;
        }
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let response = self.api.search_players(query).await;
        if !self.debouncer.is_current(ticket) {
            debug!(query, "discarding stale search response");
            return;
        }

        let mut state = self.state();
        match response {
            Ok(page) => {
                state.search_results =
                    search_availability(page.data, &state.last_30_picks, self.date);
            }
            Err(e) => {
                error!(query, error = %e, "player search failed");
                state.search_results.clear();
            }
        }
    }

    /// Validate `player` as the pick for the sheet's day.
    pub fn choose(&self, player: &Player) -> Result<()> {
        check_pickable(self.store.as_ref(), player, self.date)
    }
}

/// Fails with [`CarotError::PlayerUnavailable`] when `player` cannot be picked on `date`.
///
/// A pick already stored for `date` itself does not count against the
/// player, so the day's pick can be replaced by itself or anyone else who
/// is eligible.
pub fn check_pickable(store: &dyn PickStore, player: &Player, date: GameDay) -> Result<()> {
    let history: Vec<PlayerPick> = store
        .fetch_recent_picks(date)?
        .into_iter()
        .filter(|pick| pick.day != date)
        .collect();

    match availability(player.id, &history, date).available_on() {
        None => Ok(()),
        Some(available_on) => Err(CarotError::PlayerUnavailable {
            name: player.full_name(),
            available_on: available_on.display_long(),
        }),
    }
}
