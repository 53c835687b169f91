//! Core utilities shared across the crate
//!
//! - `dates`: game status formatting and season constants
//! - `http`: request headers for the stats API

pub mod dates;
pub mod http;

pub use dates::{format_status, format_status_in, season_start, ELIGIBILITY_WINDOW_DAYS};
pub use http::common_headers;
