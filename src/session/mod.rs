//! Screen state for the daily games list and the pick sheet
//!
//! Nothing here renders; a front end reads snapshots and calls the
//! transition methods.
//! - `games_list`: the day's games, ranked scores and the user's pick
//! - `my_pick`: eligible past picks and debounced player search
//! - `navigation`: where the games list currently points
//! - `debounce`: last-writer-wins request gating

pub mod debounce;
pub mod games_list;
pub mod my_pick;
pub mod navigation;

pub use debounce::{Debouncer, Ticket};
pub use games_list::{GamesListSession, GamesListState, LoadPhase};
pub use my_pick::{MyPickSession, MyPickState};
pub use navigation::{Destination, GameDetail, MyPickRequest, Top25};
