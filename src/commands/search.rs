//! Player search with pick availability

use crate::{
    picks::SearchResult,
    session::{MyPickSession, MyPickState},
    GameDay, Result,
};

use super::{
    common::{print_json, CommandContext},
    picks::recent_pick_row,
};

/// Run one search through the pick sheet and return its state.
pub async fn search_sheet(ctx: &CommandContext, date: GameDay, query: &str) -> MyPickState {
    let sheet = MyPickSession::new(
        ctx.api.clone(),
        ctx.store.clone(),
        date,
        Vec::new(),
        ctx.config.search_debounce,
    );
    sheet.on_appeared();
    sheet.search_query_changed(query).await;
    sheet.snapshot()
}

/// Handle the search command
pub async fn handle_search(
    ctx: &CommandContext,
    date: GameDay,
    query: &str,
    as_json: bool,
) -> Result<()> {
    let state = search_sheet(ctx, date, query).await;

    if as_json {
        return print_json(&state.search_results);
    }
    if state.search_results.is_empty() {
        println!("No players match '{}'", query);
    }
    for result in &state.search_results {
        println!("{}", search_row(result));
    }
    for line in recent_matches(&state, query) {
        println!("{}", line);
    }
    Ok(())
}

/// Recent picks whose name matches `query`, headed by a blank line.
pub fn recent_matches(state: &MyPickState, query: &str) -> Vec<String> {
    let picks = state.recent_picks_matching(query);
    if picks.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Picked recently".to_string()];
    lines.extend(picks.into_iter().map(recent_pick_row));
    lines
}

pub fn search_row(result: &SearchResult) -> String {
    let player = &result.player;
    let availability = match result.availability.available_on() {
        None => "available".to_string(),
        Some(day) => format!("available on {}", day.display_long()),
    };
    format!(
        "{:>8}  {:<26} {:<3} {:<14} {}",
        player.id.as_u64(),
        player.full_name(),
        player.position,
        player.team.name,
        availability
    )
}
