//! Pick history for the eligibility window

use serde::Serialize;

use crate::{
    core::ELIGIBILITY_WINDOW_DAYS,
    picks::AvailablePick,
    storage::PlayerPick,
    GameDay, Result,
};

use super::common::{print_json, CommandContext};

#[derive(Debug, Serialize)]
struct PicksOutput<'a> {
    date: GameDay,
    last_30_picks: &'a [PlayerPick],
    available_past_picks: &'a [AvailablePick],
}

/// Handle the picks command
pub async fn handle_picks(ctx: &CommandContext, date: GameDay, as_json: bool) -> Result<()> {
    let session = ctx.load_day(date).await;
    let sheet = session.open_my_pick(ctx.config.search_debounce);
    sheet.on_appeared();
    let state = sheet.snapshot();

    if as_json {
        return print_json(&PicksOutput {
            date,
            last_30_picks: &state.last_30_picks,
            available_past_picks: &state.available_past_picks,
        });
    }

    for line in render_picks(&state.last_30_picks, &state.available_past_picks) {
        println!("{}", line);
    }
    Ok(())
}

pub fn render_picks(recent: &[PlayerPick], available: &[AvailablePick]) -> Vec<String> {
    let mut lines = vec!["Last 30 days".to_string()];
    if recent.is_empty() {
        lines.push("    no picks".to_string());
    }
    for pick in recent.iter().rev() {
        lines.push(recent_pick_row(pick));
    }

    lines.push(String::new());
    lines.push("Available again today".to_string());
    if available.is_empty() {
        lines.push("    none".to_string());
    }
    for entry in available {
        let at = if entry.is_playing_on_the_road { "@" } else { "vs" };
        lines.push(format!(
            "    {:>8}  {} {} {}",
            entry.player.id.as_u64(),
            entry.player.full_name(),
            at,
            entry.opponent
        ));
    }
    lines
}

/// One past pick with the day its player can be picked again.
pub fn recent_pick_row(pick: &PlayerPick) -> String {
    format!(
        "    {}  {}  available on {}",
        pick.day,
        pick.player.full_name(),
        pick.day.days_after(ELIGIBILITY_WINDOW_DAYS).display_long()
    )
}
