//! Client for the balldontlie NBA stats API
//!
//! - `types`: response payloads (games, stats rows, players)
//! - `http`: the [`StatsApi`](http::StatsApi) seam and its reqwest implementation

pub mod http;
pub mod types;

pub use http::{HttpStatsApi, StatsApi, STATS_PER_PAGE};
