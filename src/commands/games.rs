//! The day's games with scoreboards, best picks and the top three

use serde::Serialize;

use crate::{
    scoring::{GameScore, MyPick, PlayerScore},
    session::GamesListState,
    GameDay, Result,
};

use super::common::{my_pick_line, print_json, score_row, CommandContext};

#[derive(Debug, Serialize)]
struct GamesOutput<'a> {
    date: GameDay,
    games: &'a [GameScore],
    top_three: &'a [PlayerScore],
    my_pick: &'a MyPick,
}

/// Handle the games command
pub async fn handle_games(ctx: &CommandContext, date: GameDay, as_json: bool) -> Result<()> {
    let state = ctx.load_day(date).await.snapshot();

    if as_json {
        return print_json(&GamesOutput {
            date,
            games: &state.games,
            top_three: state.top_three(),
            my_pick: &state.my_pick,
        });
    }

    for line in render_games(&state) {
        println!("{}", line);
    }
    Ok(())
}

fn best_pick_label(score: Option<&PlayerScore>) -> String {
    match score {
        Some(score) => format!("{} {}", score.display_name(), score.score),
        None => "-".to_string(),
    }
}

pub fn render_games(state: &GamesListState) -> Vec<String> {
    let mut lines = vec![state.date.display_long(), my_pick_line(&state.my_pick)];

    if state.games.is_empty() {
        lines.push("No games".to_string());
        return lines;
    }

    lines.push(String::new());
    for game in &state.games {
        lines.push(format!(
            "{} @ {}  {}  {}",
            game.visitor_team.name,
            game.home_team.name,
            game.scoreboard(),
            game.status_display()
        ));
        if !game.best_picks.is_empty() {
            lines.push(format!(
                "    best: {} | {}",
                best_pick_label(game.best_picks.visitor.as_ref()),
                best_pick_label(game.best_picks.home.as_ref())
            ));
        }
    }

    let top = state.top_three();
    if !top.is_empty() {
        lines.push(String::new());
        lines.push("Top 3".to_string());
        for (i, score) in top.iter().enumerate() {
            lines.push(score_row(i + 1, score, &state.my_pick));
        }
    }
    lines
}
