use super::*;
use crate::test_helpers::{MockEndpoint, record};

fn found(records: Vec<crate::wire::RequirementRecord>) -> Result<SearchResponse, EndpointError> {
    Ok(SearchResponse { success: true, data: Some(records), message: None })
}

fn state_with_results() -> TrackState {
    let mut state = TrackState::default();
    state.begin();
    state.apply(found(vec![record("Old", "Done")])).expect("apply");
    state
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn begin_enters_loading_once() {
    let mut state = TrackState::default();
    assert!(state.begin());
    assert_eq!(state.phase, SearchPhase::Loading);
    assert!(!state.begin());
}

#[test]
fn apply_success_replaces_results_and_resets_filter() {
    let mut state = state_with_results();
    state.set_filter(StatusFilter::parse("Done"));
    state.begin();

    let count = state.apply(found(vec![record("A", "Pending"), record("B", "Done")])).expect("apply");

    assert_eq!(count, 2);
    assert_eq!(state.phase, SearchPhase::Results);
    assert_eq!(state.filter, StatusFilter::All);
    assert_eq!(state.results.len(), 2);
}

#[test]
fn apply_empty_list_shows_empty_state_and_keeps_previous_set() {
    let mut state = state_with_results();
    state.begin();
    assert_eq!(state.apply(found(Vec::new())), Ok(0));
    assert_eq!(state.phase, SearchPhase::Empty);
    assert_eq!(state.results.records()[0].title, "Old");
}

#[test]
fn apply_success_false_shows_empty_state() {
    let mut state = TrackState::default();
    state.begin();
    let reply = Ok(SearchResponse { success: false, data: Some(vec![record("A", "Done")]), message: None });
    assert_eq!(state.apply(reply), Ok(0));
    assert_eq!(state.phase, SearchPhase::Empty);
    assert!(state.results.is_empty());
}

#[test]
fn apply_error_is_caught_and_shows_empty_state() {
    let mut state = TrackState::default();
    state.begin();
    let err = state.apply(Err(EndpointError::Status { status: 500 })).expect_err("error");
    assert_eq!(err, SearchError::Endpoint(EndpointError::Status { status: 500 }));
    assert_eq!(state.phase, SearchPhase::Empty);
    assert!(!state.is_loading());
}

// =============================================================
// Whole flow
// =============================================================

#[tokio::test]
async fn search_then_filter_done_shows_one_card() {
    let endpoint = MockEndpoint::with_search(found(vec![record("Monitor", "Pending"), record("Keyboard", "Done")]));
    let mut state = TrackState::default();

    let count = run_search(&mut state, &endpoint, "user@example.com").await.expect("search");
    assert_eq!(count, 2);
    assert_eq!(state.visible_cards().len(), 2);

    state.set_filter(StatusFilter::parse("Done"));
    let cards = state.visible_cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Keyboard");

    state.set_filter(StatusFilter::All);
    let titles: Vec<String> = state.visible_cards().into_iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Monitor", "Keyboard"]);
    assert_eq!(endpoint.call_count(), 1);
}

#[tokio::test]
async fn search_sends_normalized_email() {
    let endpoint = MockEndpoint::with_search(found(vec![record("A", "Done")]));
    let mut state = TrackState::default();
    run_search(&mut state, &endpoint, "  User@Example.COM ").await.expect("search");
    assert_eq!(*endpoint.searched.lock().unwrap(), vec!["user@example.com".to_owned()]);
}

#[tokio::test]
async fn invalid_email_is_rejected_before_request_and_state_is_unchanged() {
    let endpoint = MockEndpoint::default();
    let mut state = state_with_results();
    let before = state.clone();

    let err = run_search(&mut state, &endpoint, "not-an-email").await.expect_err("invalid");

    assert_eq!(err, SearchError::InvalidEmail);
    assert_eq!(endpoint.call_count(), 0);
    assert_eq!(state, before);
}

#[tokio::test]
async fn empty_email_is_rejected_before_request() {
    let endpoint = MockEndpoint::default();
    let mut state = TrackState::default();
    let err = run_search(&mut state, &endpoint, "   ").await.expect_err("empty");
    assert_eq!(err, SearchError::EmptyEmail);
    assert_eq!(endpoint.call_count(), 0);
    assert_eq!(state.phase, SearchPhase::Idle);
}

#[tokio::test]
async fn search_while_loading_is_refused() {
    let endpoint = MockEndpoint::default();
    let mut state = TrackState::default();
    state.begin();
    let err = run_search(&mut state, &endpoint, "user@example.com").await.expect_err("busy");
    assert_eq!(err, SearchError::InProgress);
    assert_eq!(endpoint.call_count(), 0);
}

#[tokio::test]
async fn failed_request_reports_error_and_empty_state() {
    let endpoint = MockEndpoint::with_search(Err(EndpointError::Request("offline".to_owned())));
    let mut state = TrackState::default();
    let err = run_search(&mut state, &endpoint, "user@example.com").await.expect_err("offline");
    assert_eq!(err.user_message(), "Error loading requirements. Please try again.");
    assert_eq!(state.phase, SearchPhase::Empty);
}
