//! Unit tests for CLI wrapper types

use super::*;

#[test]
fn test_player_id_parse_and_display() {
    let id: PlayerId = "132".parse().unwrap();
    assert_eq!(id, PlayerId::new(132));
    assert_eq!(id.as_u64(), 132);
    assert_eq!(id.to_string(), "132");
}

#[test]
fn test_player_id_parse_invalid() {
    let result = "luka".parse::<PlayerId>();
    assert!(matches!(result, Err(CarotError::InvalidId(_))));
}

#[test]
fn test_game_id_parse() {
    let id: GameId = "1037593".parse().unwrap();
    assert_eq!(id.as_u64(), 1037593);
}

#[test]
fn test_ids_serialize_transparently() {
    let json = serde_json::to_string(&TeamId::new(7)).unwrap();
    assert_eq!(json, "7");

    let id: PlayerId = serde_json::from_str("246").unwrap();
    assert_eq!(id, PlayerId::new(246));
}

#[test]
fn test_game_day_parse_and_display() {
    let day: GameDay = "2024-01-17".parse().unwrap();
    assert_eq!(day, GameDay::from_ymd(2024, 1, 17).unwrap());
    assert_eq!(day.to_string(), "2024-01-17");
}

#[test]
fn test_game_day_parse_trims_whitespace() {
    let day: GameDay = " 2024-03-05 ".parse().unwrap();
    assert_eq!(day.to_string(), "2024-03-05");
}

#[test]
fn test_game_day_parse_invalid() {
    for input in ["17/01/2024", "2024-13-01", "", "yesterday"] {
        match input.parse::<GameDay>() {
            Err(CarotError::InvalidDate { value }) => assert_eq!(value, input),
            other => panic!("Expected InvalidDate for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_game_day_arithmetic_crosses_month_and_year() {
    let day = GameDay::from_ymd(2024, 1, 17).unwrap();
    assert_eq!(day.days_before(17), GameDay::from_ymd(2023, 12, 31).unwrap());
    assert_eq!(day.days_after(30), GameDay::from_ymd(2024, 2, 16).unwrap());
    // 2024 is a leap year
    let feb = GameDay::from_ymd(2024, 2, 28).unwrap();
    assert_eq!(feb.days_after(1), GameDay::from_ymd(2024, 2, 29).unwrap());
}

#[test]
fn test_game_day_arithmetic_clamps_at_range_limits() {
    let first = GameDay(NaiveDate::MIN);
    let last = GameDay(NaiveDate::MAX);
    assert_eq!(first.days_before(29), first);
    assert_eq!(last.days_after(30), last);
    assert_eq!(last.days_before(i64::MIN), last);
    assert_eq!(first.days_after(i64::MIN), first);
    assert_eq!(
        GameDay::from_ymd(2024, 1, 17).unwrap().days_after(i64::MAX),
        last
    );
}

#[test]
fn test_game_day_days_since() {
    let day = GameDay::from_ymd(2024, 1, 17).unwrap();
    assert_eq!(day.days_since(day), 0);
    assert_eq!(day.days_since(day.days_before(29)), 29);
    assert_eq!(day.days_since(day.days_after(2)), -2);
}

#[test]
fn test_game_day_display_long() {
    let day = GameDay::from_ymd(2024, 1, 7).unwrap();
    assert_eq!(day.display_long(), "Jan 7, 2024");
}

#[test]
fn test_game_day_serde_round_trip_format() {
    let day = GameDay::from_ymd(2023, 10, 24).unwrap();
    let json = serde_json::to_string(&day).unwrap();
    assert_eq!(json, "\"2023-10-24\"");
}
