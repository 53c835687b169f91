//! HTTP access to the stats API.

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    bdl::types::{Games, Players, StatsPage},
    cli::types::{GameDay, GameId},
    config::Config,
    core::http::common_headers,
    Result,
};


/// Rows requested per stats page.
pub const STATS_PER_PAGE: u32 = 100;

/// Read-only operations the app needs from the stats service.
///
/// The scoring pipeline and pick screen only talk to this trait so tests can
/// substitute scripted responses.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Games scheduled or played on `day`.
    async fn fetch_date_games(&self, day: GameDay) -> Result<Games>;

    /// One page of box scores for the given games.
    async fn fetch_games_stats(&self, game_ids: &[GameId], page: u32) -> Result<StatsPage>;

    /// Players whose name matches `query`.
    async fn search_players(&self, query: &str) -> Result<Players>;
}

/// reqwest-backed [`StatsApi`].
#[derive(Debug, Clone)]
pub struct HttpStatsApi {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl HttpStatsApi {
    pub fn new(base_url: impl Into<String>, api_key: Option<&str>) -> Result<Self> {
        let client = Client::builder().user_agent("carot/0.1").build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: common_headers(api_key)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.api_key.as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let builder = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(params);

        if let Some(req) = builder.try_clone().and_then(|b| b.build().ok()) {
            debug!(url = %req.url(), "stats api request");
        }

        let v = builder
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(v)
    }
}

/// Query pairs for the stats endpoint: one `game_ids[]` per game, then paging.
pub fn stats_query(game_ids: &[GameId], page: u32) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = game_ids
        .iter()
        .map(|id| ("game_ids[]", id.to_string()))
        .collect();
    params.push(("page", page.to_string()));
    params.push(("per_page", STATS_PER_PAGE.to_string()));
    params
}

#[async_trait]
impl StatsApi for HttpStatsApi {
    async fn fetch_date_games(&self, day: GameDay) -> Result<Games> {
        let date = day.to_string();
        self.get_json("games", &[("start_date", date.clone()), ("end_date", date)])
            .await
    }

    async fn fetch_games_stats(&self, game_ids: &[GameId], page: u32) -> Result<StatsPage> {
        self.get_json("stats", &stats_query(game_ids, page)).await
    }

    async fn search_players(&self, query: &str) -> Result<Players> {
        self.get_json("players", &[("search", query.to_string())])
            .await
    }
}
