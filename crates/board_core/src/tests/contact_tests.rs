use std::cell::RefCell;

use shared::domain::Region;

use super::*;
use crate::test_support::employer;

#[derive(Default)]
struct RecordingLauncher {
    opened: RefCell<Vec<String>>,
}

impl UriLauncher for RecordingLauncher {
    fn open_uri(&self, uri: &str) {
        self.opened.borrow_mut().push(uri.to_string());
    }
}

#[derive(Default)]
struct MemoryClipboard {
    text: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError("no display".to_string()))
    }
}

#[test]
fn inquiry_mail_is_templated_and_encoded() {
    let record = employer("c1", Region::Vic, "Agriculture");
    let intent = MailIntent::inquiry(&record);
    assert_eq!(
        intent.subject.as_deref(),
        Some("Job Opportunity Inquiry - c1 pty ltd")
    );
    assert_eq!(
        intent.body.as_deref(),
        Some("Hi Sam,\n\nI am interested in job opportunities at c1 pty ltd.\n\nBest regards")
    );
    assert_eq!(
        intent.to_uri(),
        "mailto:c1@jobs.example?subject=Job%20Opportunity%20Inquiry%20-%20c1%20pty%20ltd\
         &body=Hi%20Sam%2C%0A%0AI%20am%20interested%20in%20job%20opportunities%20at%20c1%20pty%20ltd.%0A%0ABest%20regards"
    );
}

#[test]
fn plain_mail_has_no_query() {
    let record = employer("c1", Region::Vic, "Agriculture");
    assert_eq!(MailIntent::plain(&record).to_uri(), "mailto:c1@jobs.example");
}

#[test]
fn call_copies_number_then_opens_dialer() {
    let record = employer("c2", Region::Nsw, "Mining");
    let launcher = RecordingLauncher::default();
    let mut clipboard = MemoryClipboard::default();

    assert!(place_call(&record, Some(&mut clipboard), &launcher));
    assert_eq!(clipboard.text.as_deref(), Some("+61 2 5550 0100"));
    assert_eq!(*launcher.opened.borrow(), vec!["tel:+61255500100".to_string()]);
}

#[test]
fn clipboard_failure_does_not_block_call() {
    let record = employer("c2", Region::Nsw, "Mining");
    let launcher = RecordingLauncher::default();
    let mut clipboard = BrokenClipboard;

    assert!(!place_call(&record, Some(&mut clipboard), &launcher));
    assert_eq!(launcher.opened.borrow().len(), 1);

    assert!(!place_call(&record, None, &launcher));
    assert_eq!(launcher.opened.borrow().len(), 2);
}

#[test]
fn send_mail_delegates_uri() {
    let record = employer("c3", Region::Qld, "Technology");
    let launcher = RecordingLauncher::default();
    send_mail(&launcher, &MailIntent::plain(&record));
    assert_eq!(*launcher.opened.borrow(), vec!["mailto:c3@jobs.example".to_string()]);
}
