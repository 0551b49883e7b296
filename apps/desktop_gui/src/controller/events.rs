//! Events emitted by the filter panel, list view and map view.

use board_core::{BoardAction, FilterSelection};
use shared::domain::EmployerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTemplate {
    /// Subject and greeting pre-filled.
    Inquiry,
    Plain,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    FilterChanged(FilterSelection),
    CardClicked(EmployerId),
    MarkerClicked(EmployerId),
    PopupClosed(EmployerId),
    ToggleContacted(EmployerId),
    SendEmail {
        id: EmployerId,
        template: MailTemplate,
    },
    Call {
        id: EmployerId,
        copy_to_clipboard: bool,
    },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::FilterChanged(_) => "filter_changed",
            UiEvent::CardClicked(_) => "card_clicked",
            UiEvent::MarkerClicked(_) => "marker_clicked",
            UiEvent::PopupClosed(_) => "popup_closed",
            UiEvent::ToggleContacted(_) => "toggle_contacted",
            UiEvent::SendEmail { .. } => "send_email",
            UiEvent::Call { .. } => "call",
        }
    }

    /// State change carried by this event; contact side effects have none.
    pub fn into_board_action(self) -> Option<BoardAction> {
        match self {
            UiEvent::FilterChanged(filter) => Some(BoardAction::SetFilter(filter)),
            UiEvent::CardClicked(id) | UiEvent::MarkerClicked(id) => {
                Some(BoardAction::Select(id))
            }
            UiEvent::PopupClosed(id) => Some(BoardAction::PopupClosed(id)),
            UiEvent::ToggleContacted(id) => Some(BoardAction::ToggleContacted(id)),
            UiEvent::SendEmail { .. } | UiEvent::Call { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

impl StatusBanner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Warning,
            message: message.into(),
        }
    }
}
