use shared::domain::Region;

use super::*;
use crate::{
    projection::{CardEmphasis, StatusDot},
    test_support::{employer, id, store_with},
};

fn sample_store() -> BoardStore {
    store_with(vec![
        employer("c1", Region::Vic, "Agriculture"),
        employer("c2", Region::Nsw, "Mining"),
        employer("c3", Region::Vic, "Mining"),
    ])
}

#[test]
fn select_then_popup_close_round_trip() {
    let mut store = sample_store();
    assert!(store.dispatch(BoardAction::Select(id("c1"))));
    assert_eq!(store.selection(), &Selection::Selected(id("c1")));
    assert!(store.dispatch(BoardAction::PopupClosed(id("c1"))));
    assert_eq!(store.selection(), &Selection::Unselected);
}

#[test]
fn stale_popup_close_does_not_clear_newer_selection() {
    let mut store = sample_store();
    store.dispatch(BoardAction::Select(id("c1")));
    store.dispatch(BoardAction::Select(id("c2")));
    let revision = store.revision();
    assert!(!store.dispatch(BoardAction::PopupClosed(id("c1"))));
    assert_eq!(store.selection(), &Selection::Selected(id("c2")));
    assert_eq!(store.revision(), revision);
}

#[test]
fn reselect_keeps_state_but_requests_focus_again() {
    let mut store = sample_store();
    store.dispatch(BoardAction::Select(id("c1")));
    let serial = store.focus_serial();
    store.dispatch(BoardAction::Select(id("c1")));
    assert_eq!(store.selection(), &Selection::Selected(id("c1")));
    assert_eq!(store.focus_serial(), serial + 1);
}

#[test]
fn deselect_when_unselected_changes_nothing() {
    let mut store = sample_store();
    assert!(!store.dispatch(BoardAction::Deselect));
    assert_eq!(store.revision(), 0);
}

#[test]
fn filter_change_keeps_hidden_selection_without_highlight() {
    let mut store = sample_store();
    store.dispatch(BoardAction::Select(id("c2")));
    store.dispatch(BoardAction::SetFilter(
        FilterSelection::all().with_region(shared::domain::Region::Vic),
    ));

    assert_eq!(store.selection(), &Selection::Selected(id("c2")));
    assert!(store.selected_visible().is_none());
    assert!(store.list_cards().iter().all(|card| !card.selected));
    assert!(store.map_markers().iter().all(|marker| !marker.glyph.selected));

    store.dispatch(BoardAction::SetFilter(FilterSelection::all()));
    assert_eq!(
        store.selected_visible().map(|record| record.id.as_str()),
        Some("c2")
    );
}

#[test]
fn selecting_unknown_id_is_silent() {
    let mut store = sample_store();
    store.dispatch(BoardAction::Select(id("nope")));
    assert!(store.selected_visible().is_none());
    assert!(store.list_cards().iter().all(|card| !card.selected));
}

#[test]
fn setting_identical_filter_is_not_a_change() {
    let mut store = sample_store();
    assert!(!store.dispatch(BoardAction::SetFilter(FilterSelection::from_choices(
        "all-states",
        "all-industries"
    ))));
    assert!(store.dispatch(BoardAction::SetFilter(FilterSelection::new(
        None,
        Some("Mining")
    ))));
    assert_eq!(store.visible().len(), 2);
}

#[test]
fn list_cards_reflect_contacted_and_selected_state() {
    let mut store = sample_store();
    store.dispatch(BoardAction::ToggleContacted(id("c2")));
    store.dispatch(BoardAction::Select(id("c1")));

    let cards = store.list_cards();
    assert_eq!(cards[0].emphasis(), CardEmphasis::Selected);
    assert_eq!(cards[0].status_dot(), Some(StatusDot::SelectedPulse));
    assert_eq!(cards[1].emphasis(), CardEmphasis::Contacted);
    assert_eq!(cards[1].status_dot(), Some(StatusDot::Contacted));
    assert_eq!(cards[2].emphasis(), CardEmphasis::Default);
    assert_eq!(cards[2].status_dot(), None);
}

#[test]
fn toggle_contacted_twice_restores_flags() {
    let mut store = sample_store();
    let before = store.contacted().clone();
    store.dispatch(BoardAction::ToggleContacted(id("c2")));
    assert!(store.contacted().is_contacted(&id("c2")));
    assert!(!store.contacted().is_contacted(&id("c1")));
    store.dispatch(BoardAction::ToggleContacted(id("c2")));
    assert_eq!(store.contacted(), &before);
}

#[derive(Default)]
struct RecordingObserver {
    seen: Vec<u64>,
}

impl BoardObserver for RecordingObserver {
    fn observe(&mut self, store: &BoardStore) {
        self.seen.push(store.revision());
    }
}

#[test]
fn notify_reaches_every_observer_with_same_revision() {
    let mut store = sample_store();
    store.dispatch(BoardAction::Select(id("c3")));
    let mut list = RecordingObserver::default();
    let mut map = RecordingObserver::default();
    store.notify(&mut [&mut list, &mut map]);
    assert_eq!(list.seen, vec![1]);
    assert_eq!(map.seen, vec![1]);
}

#[test]
fn blank_filter_literal_is_not_a_change() {
    let mut store = sample_store();
    let blank = FilterSelection {
        region: Some(String::new()),
        industry: Some("all-industries".to_string()),
    };
    assert!(!store.dispatch(BoardAction::SetFilter(blank)));
    assert_eq!(store.filter(), &FilterSelection::all());
    assert_eq!(store.visible().len(), 3);
}
