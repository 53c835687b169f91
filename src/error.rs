//! Error types for the Carot daily pick tracker

use thiserror::Error;


pub type Result<T> = std::result::Result<T, CarotError>;

#[derive(Error, Debug)]
pub enum CarotError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: String, value: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Player not found: {query}")]
    PlayerNotFound { query: String },

    #[error("{count} players match '{query}', be more specific")]
    AmbiguousPlayer { query: String, count: usize },

    #[error("{name} is not available until {available_on}")]
    PlayerUnavailable { name: String, available_on: String },

    #[error("Game not found: {game_id}")]
    GameNotFound { game_id: u64 },
}
