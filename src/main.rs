//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use carot::{
    cli::{Carot, Commands},
    commands::{
        common::CommandContext, game::handle_game, games::handle_games, pick::handle_pick,
        picks::handle_picks, player::handle_player, search::handle_search, top::handle_top,
    },
    Config,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "carot=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Carot::parse();
    init_logging(app.verbose);

    let mut config = Config::from_env()?;
    if let Some(db_path) = app.db_path {
        config.db_path = db_path;
    }
    let ctx = CommandContext::new(config)?;

    match app.command {
        Commands::Games { day } => handle_games(&ctx, day.date, day.json).await?,
        Commands::Top { day, limit } => handle_top(&ctx, day.date, limit, day.json).await?,
        Commands::Game { game_id, day } => handle_game(&ctx, day.date, game_id, day.json).await?,
        Commands::Player { player_id, day } => {
            handle_player(&ctx, day.date, player_id, day.json).await?
        }
        Commands::Search { query, day } => handle_search(&ctx, day.date, &query, day.json).await?,
        Commands::Pick {
            player_id,
            name,
            day,
        } => handle_pick(&ctx, day.date, player_id, name.as_deref()).await?,
        Commands::Picks { day } => handle_picks(&ctx, day.date, day.json).await?,
    }

    Ok(())
}
