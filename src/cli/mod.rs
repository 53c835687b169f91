//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{GameDay, GameId, PlayerId};

/// Arguments shared by every command that looks at one day.
#[derive(Debug, Args)]
pub struct DayArgs {
    /// Day to show (YYYY-MM-DD).
    #[clap(long, short, default_value_t = GameDay::default())]
    pub date: GameDay,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the day's games with scores and each side's best pick.
    Games {
        #[clap(flatten)]
        day: DayArgs,
    },

    /// Rank every player who played on the day.
    Top {
        #[clap(flatten)]
        day: DayArgs,

        /// How many players to show.
        #[clap(long, short, default_value_t = 25)]
        limit: usize,
    },

    /// Both rosters of a single game, ranked by score.
    Game {
        game_id: GameId,

        #[clap(flatten)]
        day: DayArgs,
    },

    /// Score breakdown of one player's box score.
    Player {
        player_id: PlayerId,

        #[clap(flatten)]
        day: DayArgs,
    },

    /// Search players by name and show whether each can be picked.
    Search {
        query: String,

        #[clap(flatten)]
        day: DayArgs,
    },

    /// Save the day's pick.
    ///
    /// `--player-id` picks again one of your past picks; `--name` searches
    /// the API and needs a single match.
    Pick {
        #[clap(long, conflicts_with = "name", required_unless_present = "name")]
        player_id: Option<PlayerId>,

        #[clap(long, short)]
        name: Option<String>,

        #[clap(flatten)]
        day: DayArgs,
    },

    /// Picks from the last thirty days and past picks available again.
    Picks {
        #[clap(flatten)]
        day: DayArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "carot", about = "Pick one NBA player a day", version)]
pub struct Carot {
    /// Log debug output to stderr (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// SQLite file holding your picks (or set `CAROT_DB_PATH`).
    #[clap(long, global = true)]
    pub db_path: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
