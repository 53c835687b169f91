use serde::Serialize;

use crate::bdl::types::PlayerStats;


/// Made shots count once, missed shots cost one.
fn shooting(made: u32, attempted: u32) -> i64 {
    let made = i64::from(made);
    made - (i64::from(attempted) - made)
}

/// Fantasy score for one player's game.
///
/// Counting stats add one each, every made shot (field goal, three, free
/// throw) adds one more, every miss and turnover subtracts one. Percentages
/// are ignored and the result is not clamped.
pub fn compute_score(stats: &PlayerStats) -> i64 {
    i64::from(stats.points)
        + i64::from(stats.rebounds)
        + i64::from(stats.assists)
        + i64::from(stats.blocks)
        + i64::from(stats.steals)
        + shooting(stats.field_goals_made, stats.field_goals_attempted)
        + shooting(stats.three_pointers_made, stats.three_pointers_attempted)
        + shooting(stats.free_throws_made, stats.free_throws_attempted)
        - i64::from(stats.turnovers)
}

/// One line of the score detail: label, raw value, contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    pub label: &'static str,
    pub value: String,
    pub points: i64,
}

/// Per-stat contributions that add up to [`compute_score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub lines: Vec<BreakdownLine>,
    pub total: i64,
}

impl ScoreBreakdown {
    pub fn from_stats(stats: &PlayerStats) -> Self {
        let count = |label, v: u32| BreakdownLine {
            label,
            value: v.to_string(),
            points: i64::from(v),
        };
        let shots = |label, made: u32, attempted: u32| BreakdownLine {
            label,
            value: format!("{} / {}", made, attempted),
            points: shooting(made, attempted),
        };

        let lines = vec![
            count("Points", stats.points),
            count("Rebounds", stats.rebounds),
            count("Assists", stats.assists),
            count("Steals", stats.steals),
            count("Blocks", stats.blocks),
            shots("Field goals", stats.field_goals_made, stats.field_goals_attempted),
            shots(
                "3 pts",
                stats.three_pointers_made,
                stats.three_pointers_attempted,
            ),
            shots(
                "Free throws",
                stats.free_throws_made,
                stats.free_throws_attempted,
            ),
            BreakdownLine {
                label: "Turnovers",
                value: stats.turnovers.to_string(),
                points: -i64::from(stats.turnovers),
            },
        ];

        Self {
            lines,
            total: compute_score(stats),
        }
    }
}
