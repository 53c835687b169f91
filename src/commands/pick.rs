//! Saving the day's pick

use tracing::info;

use crate::{
    bdl::types::Player,
    session::{GamesListSession, MyPickSession},
    CarotError, GameDay, PlayerId, Result,
};

use super::common::CommandContext;

/// Handle the pick command
///
/// The pick goes through the same sheet the games list opens: the player is
/// resolved, checked against the thirty-day window and then saved for `date`.
pub async fn handle_pick(
    ctx: &CommandContext,
    date: GameDay,
    player_id: Option<PlayerId>,
    name: Option<&str>,
) -> Result<()> {
    let session = ctx.load_day(date).await;
    let sheet = session.open_my_pick(ctx.config.search_debounce);
    sheet.on_appeared();

    let player = match (player_id, name) {
        (Some(id), _) => past_pick(ctx, date, id)?,
        (None, Some(name)) => search_one(&sheet, name).await?,
        (None, None) => {
            return Err(CarotError::PlayerNotFound {
                query: String::new(),
            })
        }
    };

    save(&session, &sheet, player)
}

fn save(session: &GamesListSession, sheet: &MyPickSession, player: Player) -> Result<()> {
    let name = player.full_name();
    session.my_pick_player_picked(player)?;
    info!(date = %sheet.date(), "pick recorded");
    println!("Picked {} for {}", name, sheet.date().display_long());
    Ok(())
}

/// A player picked earlier this season.
fn past_pick(ctx: &CommandContext, date: GameDay, id: PlayerId) -> Result<Player> {
    ctx.store
        .fetch_season_players(date)?
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CarotError::PlayerNotFound {
            query: id.to_string(),
        })
}

/// The single search hit for `name`; an exact full-name match wins over partial ones.
async fn search_one(sheet: &MyPickSession, name: &str) -> Result<Player> {
    sheet.search_query_changed(name).await;
    let mut players: Vec<Player> = sheet
        .snapshot()
        .search_results
        .into_iter()
        .map(|r| r.player)
        .collect();

    if players.len() > 1 {
        let wanted = name.trim().to_lowercase();
        let exact: Vec<Player> = players
            .iter()
            .filter(|p| p.full_name().to_lowercase() == wanted)
            .cloned()
            .collect();
        if !exact.is_empty() {
            players = exact;
        }
    }

    match players.len() {
        0 => Err(CarotError::PlayerNotFound {
            query: name.to_string(),
        }),
        1 => Ok(players.remove(0)),
        count => Err(CarotError::AmbiguousPlayer {
            query: name.to_string(),
            count,
        }),
    }
}
