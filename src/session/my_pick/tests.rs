//! Unit tests for the pick sheet

use super::*;
use crate::{
    storage::InMemoryPickStore,
    test_support::{game, player, team, ApiCall, ScriptedStatsApi},
};

const QUIET: Duration = Duration::from_millis(333);

fn day() -> GameDay {
    GameDay::from_ymd(2024, 2, 15).unwrap()
}

fn luka() -> Player {
    player(132, "Luka", "Doncic", &team(7, "Mavericks"))
}

fn jokic() -> Player {
    player(246, "Nikola", "Jokic", &team(8, "Nuggets"))
}

fn lebron() -> Player {
    player(237, "LeBron", "James", &team(14, "Lakers"))
}

fn sheet(api: ScriptedStatsApi) -> (Arc<ScriptedStatsApi>, Arc<InMemoryPickStore>, MyPickSession) {
    let api = Arc::new(api);
    let store = Arc::new(InMemoryPickStore::new());
    let games = vec![
        GameScore::from(&game(1, &team(25, "Trail Blazers"), 0, &team(7, "Mavericks"), 0)),
        GameScore::from(&game(2, &team(8, "Nuggets"), 0, &team(14, "Lakers"), 0)),
    ];
    let session = MyPickSession::new(api.clone(), store.clone(), day(), games, QUIET);
    (api, store, session)
}

#[test]
fn test_on_appeared_loads_window_and_past_picks() {
    let (_, store, sheet) = sheet(ScriptedStatsApi::default());
    store.save_pick(&luka(), day().days_before(40)).unwrap();
    store.save_pick(&jokic(), day().days_before(3)).unwrap();
    store.save_pick(&lebron(), day().days_before(31)).unwrap();

    sheet.on_appeared();

    let state = sheet.snapshot();
    let recent: Vec<&str> = state
        .last_30_picks
        .iter()
        .map(|p| p.player.last_name.as_str())
        .collect();
    assert_eq!(recent, vec!["Jokic"]);

    let available: Vec<&str> = state
        .available_past_picks
        .iter()
        .map(|a| a.player.last_name.as_str())
        .collect();
    assert_eq!(available, vec!["Doncic", "James"]);
}

#[test]
fn test_recent_picks_matching_ignores_case() {
    let (_, store, sheet) = sheet(ScriptedStatsApi::default());
    store.save_pick(&jokic(), day().days_before(3)).unwrap();
    sheet.on_appeared();

    let state = sheet.snapshot();
    assert_eq!(state.recent_picks_matching("JOK").len(), 1);
    assert_eq!(state.recent_picks_matching("nikola j").len(), 1);
    assert!(state.recent_picks_matching("luka").is_empty());
    assert!(state.recent_picks_matching("  ").is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_search_applies_availability() {
    let mut api = ScriptedStatsApi::default();
    api.players.insert("jo".to_string(), vec![jokic(), lebron()]);
    let (_, store, sheet) = sheet(api);
    store.save_pick(&jokic(), day().days_before(3)).unwrap();
    sheet.on_appeared();

    sheet.search_query_changed("jo").await;

    let state = sheet.snapshot();
    assert_eq!(state.search_query, "jo");
    assert_eq!(state.search_results.len(), 2);
    assert_eq!(
        state.search_results[0].availability.available_on(),
        Some(day().days_before(3).days_after(30))
    );
    assert!(state.search_results[1].availability.is_available());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_queries_send_one_request() {
    let mut api = ScriptedStatsApi::default();
    api.players.insert("lebron".to_string(), vec![lebron()]);
    let (api, _, sheet) = sheet(api);

    tokio::join!(sheet.search_query_changed("leb"), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        sheet.search_query_changed("lebron").await;
    });

    assert_eq!(api.calls(), vec![ApiCall::Search("lebron".to_string())]);
    let state = sheet.snapshot();
    assert_eq!(state.search_query, "lebron");
    assert_eq!(state.search_results.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_slow_earlier_response_is_discarded() {
    let mut api = ScriptedStatsApi::default();
    api.players.insert("luka".to_string(), vec![luka()]);
    api.players.insert("jokic".to_string(), vec![jokic()]);
    api.search_delay
        .insert("luka".to_string(), Duration::from_secs(2));
    let (api, _, sheet) = sheet(api);

    tokio::join!(sheet.search_query_changed("luka"), async {
        // first query is already in flight
        tokio::time::sleep(Duration::from_millis(500)).await;
        sheet.search_query_changed("jokic").await;
    });

    assert_eq!(api.calls().len(), 2);
    let state = sheet.snapshot();
    assert_eq!(state.search_results.len(), 1);
    assert_eq!(state.search_results[0].player, jokic());
}

#[tokio::test(start_paused = true)]
async fn test_empty_query_sends_nothing() {
    let (api, _, sheet) = sheet(ScriptedStatsApi::default());

    sheet.search_query_changed("   ").await;

    assert!(api.calls().is_empty());
    assert!(sheet.snapshot().search_results.is_empty());
}

#[test]
fn test_choose_rejects_recent_pick() {
    let (_, store, sheet) = sheet(ScriptedStatsApi::default());
    store.save_pick(&luka(), day().days_before(10)).unwrap();

    let err = sheet.choose(&luka()).unwrap_err();
    match err {
        CarotError::PlayerUnavailable { name, available_on } => {
            assert_eq!(name, "Luka Doncic");
            assert_eq!(available_on, day().days_after(20).display_long());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(sheet.choose(&jokic()).is_ok());
}

#[test]
fn test_choose_ignores_same_day_pick() {
    let (_, store, sheet) = sheet(ScriptedStatsApi::default());
    store.save_pick(&luka(), day()).unwrap();

    assert!(sheet.choose(&luka()).is_ok());
}
