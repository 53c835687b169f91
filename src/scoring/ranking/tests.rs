//! Unit tests for attribution, ranking and best picks

use super::*;
use crate::test_support::{game, player, stat_line, team};

fn day_games() -> Vec<GameScore> {
    let mavs = team(7, "Mavericks");
    let blazers = team(25, "Trail Blazers");
    let hawks = team(1, "Hawks");
    let celtics = team(2, "Celtics");
    vec![
        GameScore::from(&game(100, &blazers, 100, &mavs, 101)),
        GameScore::from(&game(101, &hawks, 99, &celtics, 120)),
    ]
}

fn scored(id: u64, team_id: u64, name: &str, points: u32) -> PlayerScore {
    let games = day_games();
    build_player_score(stat_line(id, &team(team_id, name), Some(id), points), &games).unwrap()
}

#[test]
fn test_build_player_score_home_side() {
    let games = day_games();
    let stats = stat_line(1, &team(25, "Trail Blazers"), Some(1), 20);

    let score = build_player_score(stats, &games).unwrap();

    assert_eq!(score.game.opponent_name, "Mavericks");
    assert_eq!(score.game.score, "100 - 101");
    assert_eq!(score.score, 20);
    assert_eq!(score.id, 1);
}

#[test]
fn test_build_player_score_visitor_side() {
    let games = day_games();
    let stats = stat_line(2, &team(7, "Mavericks"), Some(2), 30);

    let score = build_player_score(stats, &games).unwrap();

    assert_eq!(score.game.opponent_name, "Trail Blazers");
    assert_eq!(score.game.score, "101 - 100");
}

#[test]
fn test_build_player_score_unknown_team_is_dropped() {
    let games = day_games();
    let stats = stat_line(3, &team(99, "Nowhere"), Some(3), 50);
    assert!(build_player_score(stats, &games).is_none());
}

#[test]
fn test_build_player_score_tolerates_missing_player() {
    let games = day_games();
    let stats = stat_line(4, &team(1, "Hawks"), None, 12);

    let score = build_player_score(stats, &games).unwrap();
    assert_eq!(score.player_id(), None);
    assert_eq!(score.team_id(), None);
    assert_eq!(score.score, 12);
}

#[test]
fn test_rank_sorts_descending() {
    let mut ranked = Vec::new();
    rank_and_accumulate(
        &mut ranked,
        vec![
            scored(1, 7, "Mavericks", 10),
            scored(2, 7, "Mavericks", 30),
            scored(3, 25, "Trail Blazers", 20),
        ],
    );
    let scores: Vec<i64> = ranked.iter().map(|s| s.score).collect();
    assert_eq!(scores, vec![30, 20, 10]);
}

#[test]
fn test_rank_is_stable_across_pages() {
    let mut ranked = Vec::new();
    rank_and_accumulate(
        &mut ranked,
        vec![
            scored(1, 7, "Mavericks", 15),
            scored(2, 7, "Mavericks", 15),
            scored(3, 25, "Trail Blazers", 40),
        ],
    );
    rank_and_accumulate(
        &mut ranked,
        vec![scored(4, 1, "Hawks", 15), scored(5, 2, "Celtics", 15)],
    );
    rank_and_accumulate(&mut ranked, vec![scored(6, 2, "Celtics", 15)]);

    let ids: Vec<u64> = ranked.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 1, 2, 4, 5, 6]);
}

#[test]
fn test_assign_best_picks_per_side() {
    let mut games = day_games();
    let mut ranked = Vec::new();
    rank_and_accumulate(
        &mut ranked,
        vec![
            scored(1, 7, "Mavericks", 10),
            scored(2, 7, "Mavericks", 30),
            scored(3, 25, "Trail Blazers", 20),
            scored(4, 25, "Trail Blazers", 25),
        ],
    );

    assign_best_picks(&mut games, &ranked);

    let picks = &games[0].best_picks;
    assert_eq!(picks.visitor.as_ref().map(|s| s.id), Some(2));
    assert_eq!(picks.home.as_ref().map(|s| s.id), Some(4));
    // second game has no attributed rows at all
    assert!(games[1].best_picks.is_empty());
}

#[test]
fn test_assign_best_picks_one_side_missing() {
    let mut games = day_games();
    let ranked = vec![scored(5, 2, "Celtics", 18)];

    assign_best_picks(&mut games, &ranked);

    assert_eq!(games[1].best_picks.visitor.as_ref().map(|s| s.id), Some(5));
    assert!(games[1].best_picks.home.is_none());
}

#[test]
fn test_assign_best_picks_ignores_rows_without_player() {
    let mut games = day_games();
    let games_ref = day_games();
    let anonymous =
        build_player_score(stat_line(9, &team(1, "Hawks"), None, 80), &games_ref).unwrap();
    let named = scored(10, 1, "Hawks", 5);
    let mut ranked = Vec::new();
    rank_and_accumulate(&mut ranked, vec![anonymous, named]);

    assign_best_picks(&mut games, &ranked);

    assert_eq!(games[1].best_picks.home.as_ref().map(|s| s.id), Some(10));
}

#[test]
fn test_assign_best_picks_is_recomputed() {
    let mut games = day_games();
    let mut ranked = vec![scored(1, 7, "Mavericks", 10)];
    assign_best_picks(&mut games, &ranked);
    assert_eq!(games[0].best_picks.visitor.as_ref().map(|s| s.id), Some(1));

    rank_and_accumulate(&mut ranked, vec![scored(2, 7, "Mavericks", 11)]);
    assign_best_picks(&mut games, &ranked);
    assert_eq!(games[0].best_picks.visitor.as_ref().map(|s| s.id), Some(2));
}

#[test]
fn test_top_three() {
    let ranked: Vec<PlayerScore> = (1..=2).map(|i| scored(i, 7, "Mavericks", 10)).collect();
    assert!(top_three(&ranked).is_empty());

    let ranked: Vec<PlayerScore> = (1..=5).map(|i| scored(i, 7, "Mavericks", 10)).collect();
    let ids: Vec<u64> = top_three(&ranked).iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_top_n() {
    let ranked: Vec<PlayerScore> = (1..=24).map(|i| scored(i, 7, "Mavericks", 1)).collect();
    assert!(top_n(&ranked, 25).is_none());

    let ranked: Vec<PlayerScore> = (1..=30).map(|i| scored(i, 7, "Mavericks", 1)).collect();
    assert_eq!(top_n(&ranked, 25).map(|s| s.len()), Some(25));

    let ranked: Vec<PlayerScore> = (1..=25).map(|i| scored(i, 7, "Mavericks", 1)).collect();
    assert_eq!(top_n(&ranked, 25).map(|s| s.len()), Some(25));
}

#[test]
fn test_team_scores_keeps_ranking_order() {
    let mut ranked = Vec::new();
    rank_and_accumulate(
        &mut ranked,
        vec![
            scored(1, 7, "Mavericks", 10),
            scored(2, 25, "Trail Blazers", 50),
            scored(3, 7, "Mavericks", 30),
        ],
    );
    let mavs: Vec<u64> = team_scores(&ranked, TeamId::new(7))
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(mavs, vec![3, 1]);
}

#[test]
fn test_find_pick() {
    let mavs = team(7, "Mavericks");
    let ranked = vec![scored(132, 7, "Mavericks", 40)];

    let picked = find_pick(player(132, "Luka", "Doncic", &mavs), &ranked);
    assert_eq!(picked.player_score().map(|s| s.id), Some(132));
    assert!(picked.is(&ranked[0]));

    let not_playing = find_pick(player(77, "Kyrie", "Irving", &mavs), &ranked);
    assert_eq!(not_playing.player().map(|p| p.id), Some(PlayerId::new(77)));
    assert!(!not_playing.is(&ranked[0]));
}

#[test]
fn test_game_score_from_game() {
    let games = day_games();
    let first = &games[0];
    assert_eq!(first.id, GameId::new(100));
    assert_eq!(first.visitor_team.name, "Mavericks");
    assert_eq!(first.home_team.score, 100);
    assert_eq!(first.scoreboard(), "101 - 100");
    assert_eq!(first.status_display(), "Final");
    assert!(first.involves(TeamId::new(25)));
    assert!(!first.involves(TeamId::new(1)));
}
