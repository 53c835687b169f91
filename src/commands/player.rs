//! Score breakdown of one player's box score

use serde::Serialize;

use crate::{
    scoring::{PlayerScore, ScoreBreakdown},
    CarotError, GameDay, PlayerId, Result,
};

use super::common::{print_json, CommandContext};

#[derive(Debug, Serialize)]
struct PlayerOutput<'a> {
    score: &'a PlayerScore,
    breakdown: ScoreBreakdown,
}

/// Handle the player command
pub async fn handle_player(
    ctx: &CommandContext,
    date: GameDay,
    player_id: PlayerId,
    as_json: bool,
) -> Result<()> {
    let session = ctx.load_day(date).await;
    let state = session.snapshot();
    let score = state
        .player_scores
        .iter()
        .find(|s| s.player_id() == Some(player_id))
        .ok_or_else(|| CarotError::PlayerNotFound {
            query: player_id.to_string(),
        })?;
    session.player_detail_tapped(score.clone());

    if as_json {
        return print_json(&PlayerOutput {
            score,
            breakdown: score.breakdown(),
        });
    }
    for line in render_player(score) {
        println!("{}", line);
    }
    Ok(())
}

pub fn render_player(score: &PlayerScore) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} vs {} ({})",
            score.display_name(),
            score.game.opponent_name,
            score.game.score
        ),
        format!("Minutes: {}", score.stats.minutes),
    ];
    let breakdown = score.breakdown();
    for line in &breakdown.lines {
        lines.push(format!("{:<14} {:>9} {:>+5}", line.label, line.value, line.points));
    }
    lines.push(format!("{:<14} {:>9} {:>5}", "Score", "", breakdown.total));
    lines
}
