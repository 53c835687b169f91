//! Both rosters of one game

use crate::{
    scoring::MyPick,
    session::{Destination, GameDetail},
    CarotError, GameDay, GameId, Result,
};

use super::common::{print_json, score_row, CommandContext};

/// Handle the game command
pub async fn handle_game(
    ctx: &CommandContext,
    date: GameDay,
    game_id: GameId,
    as_json: bool,
) -> Result<()> {
    let session = ctx.load_day(date).await;
    session.game_detail_tapped(game_id)?;

    let state = session.snapshot();
    let detail = match state.destination {
        Some(Destination::GameDetail(detail)) => detail,
        _ => {
            return Err(CarotError::GameNotFound {
                game_id: game_id.as_u64(),
            })
        }
    };

    if as_json {
        return print_json(&detail);
    }
    for line in render_game(&detail, &state.my_pick) {
        println!("{}", line);
    }
    Ok(())
}

pub fn render_game(detail: &GameDetail, my_pick: &MyPick) -> Vec<String> {
    let game = &detail.game;
    let mut lines = vec![format!(
        "{} @ {}  {}  {}",
        game.visitor_team.name,
        game.home_team.name,
        game.scoreboard(),
        game.status_display()
    )];

    for (name, scores) in [
        (&game.visitor_team.name, &detail.visitor_scores),
        (&game.home_team.name, &detail.home_scores),
    ] {
        lines.push(String::new());
        lines.push(name.clone());
        if scores.is_empty() {
            lines.push("    no box scores".to_string());
        }
        for (i, score) in scores.iter().enumerate() {
            lines.push(score_row(i + 1, score, my_pick));
        }
    }
    lines
}
