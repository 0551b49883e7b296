use board_core::FilterSelection;
use crossbeam_channel::bounded;
use shared::domain::EmployerId;

use super::dispatch_ui_event;
use crate::controller::events::UiEvent;

#[test]
fn queued_event_reaches_receiver_untouched() {
    let (tx, rx) = bounded(4);
    let mut status = String::new();
    let event = UiEvent::CardClicked(EmployerId::new("emp-001"));

    dispatch_ui_event(&tx, event.clone(), &mut status);

    assert_eq!(rx.try_recv().ok(), Some(event));
    assert!(status.is_empty());
}

#[test]
fn full_queue_reports_status() {
    let (tx, _rx) = bounded(1);
    let mut status = String::new();
    dispatch_ui_event(&tx, UiEvent::FilterChanged(FilterSelection::all()), &mut status);
    dispatch_ui_event(&tx, UiEvent::FilterChanged(FilterSelection::all()), &mut status);
    assert!(status.contains("full"));
}

#[test]
fn disconnected_queue_reports_status() {
    let (tx, rx) = bounded::<UiEvent>(1);
    drop(rx);
    let mut status = String::new();
    dispatch_ui_event(
        &tx,
        UiEvent::ToggleContacted(EmployerId::new("emp-002")),
        &mut status,
    );
    assert!(status.contains("disconnected"));
}

#[test]
fn contact_events_carry_no_board_action() {
    use crate::controller::events::MailTemplate;

    let id = EmployerId::new("emp-003");
    assert!(UiEvent::SendEmail {
        id: id.clone(),
        template: MailTemplate::Inquiry,
    }
    .into_board_action()
    .is_none());
    assert!(UiEvent::Call {
        id: id.clone(),
        copy_to_clipboard: true,
    }
    .into_board_action()
    .is_none());
    assert_eq!(
        UiEvent::MarkerClicked(id.clone()).into_board_action(),
        Some(board_core::BoardAction::Select(id))
    );
}
