//! Drives the library through `handle_event` the way the plugin shim does:
//! actions are executed by hand and host responses fed back as events.

use std::collections::BTreeMap;
use zfolio::rawg::LookupRequest;
use zfolio::ui::PageView;
use zfolio::{handle_event, initialize, Action, Config, Event, Route};

const HALO: &str = r#"{
  "count": 3,
  "next": "https://api.rawg.io/api/games?page=2",
  "previous": null,
  "results": [
    {"id": 1, "name": "Halo: Combat Evolved", "released": "2001-11-15", "rating": 4.4},
    {"id": 2, "name": "Halo Infinite", "released": "2021-12-08", "rating": 0},
    {"id": 3, "name": "Halo 3", "released": "2007-09-25", "rating": 4.5}
  ]
}"#;

fn games_state() -> zfolio::AppState {
    let config = Config {
        api_key: Some("test-key".to_string()),
        start_route: Route::Games,
        ..Default::default()
    };
    initialize(&config)
}

fn search(state: &mut zfolio::AppState, query: &str) -> LookupRequest {
    handle_event(state, &Event::SearchMode).unwrap();
    for c in query.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
    let (_, actions) = handle_event(state, &Event::Submit).unwrap();
    match actions.as_slice() {
        [Action::WebRequest(request)] => request.clone(),
        other => panic!("expected one web request, got {other:?}"),
    }
}

fn respond(state: &mut zfolio::AppState, status: u16, body: &str, context: BTreeMap<String, String>) -> bool {
    let (render, _) = handle_event(
        state,
        &Event::LookupResponse {
            status,
            body: body.as_bytes().to_vec(),
            context,
        },
    )
    .unwrap();
    render
}

fn shown_names(state: &zfolio::AppState) -> Vec<&str> {
    state.shown.iter().map(|g| g.name.as_str()).collect()
}

#[test]
fn search_filter_and_sort() {
    let mut state = games_state();
    let request = search(&mut state, "halo");
    assert!(request.url.starts_with("https://api.rawg.io/api/games?"));
    assert!(request.url.contains("search=halo"));

    assert!(respond(&mut state, 200, HALO, request.context));
    assert_eq!(shown_names(&state), ["Halo: Combat Evolved", "Halo Infinite", "Halo 3"]);

    handle_event(&mut state, &Event::ToggleExcludeZero).unwrap();
    assert_eq!(shown_names(&state), ["Halo: Combat Evolved", "Halo 3"]);

    // relevance → latest
    handle_event(&mut state, &Event::CycleSort).unwrap();
    assert_eq!(shown_names(&state), ["Halo 3", "Halo: Combat Evolved"]);

    let vm = state.compute_viewmodel(30, 80);
    let PageView::Games(games) = vm.page else {
        panic!("expected games page");
    };
    assert!(games.error.is_none());
    assert!(games.empty_state.is_none());
    assert_eq!(games.display_items.len(), 2);
    assert!(games.display_items[0].is_selected);
}

#[test]
fn failure_then_success_clears_error() {
    let mut state = games_state();
    let request = search(&mut state, "halo");
    respond(&mut state, 500, "oops", request.context);

    assert!(state.shown.is_empty());
    let vm = state.compute_viewmodel(30, 80);
    let PageView::Games(games) = vm.page else {
        panic!("expected games page");
    };
    assert_eq!(games.error.as_deref(), Some("Could not load games right now. Please try again."));
    assert_eq!(games.empty_state.map(|e| e.message), Some("No results".to_string()));

    let request = search(&mut state, "");
    // The box still holds "halo"; submitting again retries the same query.
    assert!(request.url.contains("search=halo"));
    respond(&mut state, 200, HALO, request.context);

    assert_eq!(state.shown.len(), 3);
    assert!(state.catalog.error().is_none());
}

#[test]
fn response_for_superseded_request_is_dropped() {
    let mut state = games_state();
    let first = search(&mut state, "halo");
    respond(&mut state, 200, HALO, first.context.clone());

    let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
    let [Action::WebRequest(second)] = actions.as_slice() else {
        panic!("expected next page request");
    };
    assert!(second.url.contains("page=2"));

    // Replaying the first response does not match the in-flight ticket.
    assert!(!respond(&mut state, 200, r#"{"count":0,"results":[]}"#, first.context));
    assert_eq!(state.shown.len(), 3);
    assert!(state.catalog.is_busy());
}

#[test]
fn details_load_into_the_detail_pane() {
    let mut state = games_state();
    let request = search(&mut state, "halo");
    respond(&mut state, 200, HALO, request.context);

    let (_, actions) = handle_event(&mut state, &Event::OpenDetails).unwrap();
    let [Action::WebRequest(details)] = actions.as_slice() else {
        panic!("expected details request");
    };
    assert!(details.url.starts_with("https://api.rawg.io/api/games/1?"));

    let body = r#"{"id": 1, "name": "Halo: Combat Evolved", "description_raw": "Master Chief.",
                   "developers": [{"name": "Bungie"}], "publishers": []}"#;
    respond(&mut state, 200, body, details.context.clone());

    let PageView::Games(games) = state.compute_viewmodel(30, 80).page else {
        panic!("expected games page");
    };
    let detail = games.detail.unwrap();
    assert_eq!(detail.description.as_deref(), Some("Master Chief."));
    assert!(detail.facts.contains(&("Developers".to_string(), "Bungie".to_string())));
}

#[test]
fn typewriter_runs_only_while_home_is_shown() {
    let mut state = initialize(&Config::default());
    let (_, actions) = handle_event(&mut state, &Event::Visible(true)).unwrap();
    assert!(matches!(actions.as_slice(), [Action::ScheduleTick { .. }]));

    for _ in 0..3 {
        let (_, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert_eq!(actions.len(), 1, "each tick schedules exactly one more");
    }
    let typed = state.typewriter.text().to_string();
    assert!("Game Developer".starts_with(&typed));

    handle_event(&mut state, &Event::ShowRoute(Route::Games)).unwrap();
    let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.typewriter.text(), typed);
}
