//! Ranked scores for the day

use crate::{scoring::PlayerScore, GameDay, Result};

use super::common::{my_pick_line, print_json, score_row, CommandContext};

/// Handle the top command
pub async fn handle_top(
    ctx: &CommandContext,
    date: GameDay,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    let state = ctx.load_day(date).await.snapshot();
    let ranked = leaders(&state.player_scores, limit);

    if as_json {
        return print_json(ranked);
    }

    println!("{}", date.display_long());
    println!("{}", my_pick_line(&state.my_pick));
    if ranked.is_empty() {
        println!("No box scores yet");
    }
    for (i, score) in ranked.iter().enumerate() {
        println!("{}", score_row(i + 1, score, &state.my_pick));
    }
    Ok(())
}

/// The first `limit` ranked scores, or all of them when there are fewer.
pub fn leaders(ranked: &[PlayerScore], limit: usize) -> &[PlayerScore] {
    &ranked[..limit.min(ranked.len())]
}
