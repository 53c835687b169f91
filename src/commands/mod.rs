//! Command implementations for the carot CLI

pub mod common;
pub mod game;
pub mod games;
pub mod pick;
pub mod picks;
pub mod player;
pub mod search;
pub mod top;
