//! The coordinating store: single owner of filter, contacted and selection state.

use std::sync::Arc;

use shared::domain::{EmployerId, EmployerRecord};
use tracing::{debug, warn};

use crate::{
    contacted::ContactedSet,
    dataset::Dataset,
    filter::{apply_filter, FilterSelection},
    projection::{ListCard, MapMarker},
    selection::Selection,
};

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    SetFilter(FilterSelection),
    ToggleContacted(EmployerId),
    Select(EmployerId),
    Deselect,
    /// The map popup for this employer was dismissed.
    PopupClosed(EmployerId),
}

impl BoardAction {
    fn name(&self) -> &'static str {
        match self {
            BoardAction::SetFilter(_) => "set_filter",
            BoardAction::ToggleContacted(_) => "toggle_contacted",
            BoardAction::Select(_) => "select",
            BoardAction::Deselect => "deselect",
            BoardAction::PopupClosed(_) => "popup_closed",
        }
    }
}

/// A view that reconciles its presentation state against the store.
pub trait BoardObserver {
    fn observe(&mut self, store: &BoardStore);
}

#[derive(Debug, Clone)]
pub struct BoardStore {
    dataset: Arc<Dataset>,
    filter: FilterSelection,
    contacted: ContactedSet,
    selection: Selection,
    revision: u64,
    focus_serial: u64,
}

impl BoardStore {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            filter: FilterSelection::default(),
            contacted: ContactedSet::new(),
            selection: Selection::Unselected,
            revision: 0,
            focus_serial: 0,
        }
    }

    /// Applies `action`; returns `true` when observers have something new to see.
    pub fn dispatch(&mut self, action: BoardAction) -> bool {
        let action_name = action.name();
        let changed = match action {
            BoardAction::SetFilter(filter) => {
                let filter =
                    FilterSelection::new(filter.region.as_deref(), filter.industry.as_deref());
                if filter == self.filter {
                    false
                } else {
                    self.filter = filter;
                    true
                }
            }
            BoardAction::ToggleContacted(id) => {
                if !self.dataset.contains(&id) {
                    warn!(
                        employer = %id,
                        "toggling contacted flag for an employer outside the dataset"
                    );
                }
                let contacted = self.contacted.toggle(&id);
                debug!(employer = %id, contacted, "contacted flag toggled");
                true
            }
            BoardAction::Select(id) => {
                // Reselecting the same employer keeps the state but re-requests focus.
                self.selection.select(&id);
                self.focus_serial += 1;
                true
            }
            BoardAction::Deselect => self.selection.deselect(),
            BoardAction::PopupClosed(id) => {
                let cleared = self.selection.close_popup(&id);
                if !cleared {
                    debug!(employer = %id, "stale popup close ignored");
                }
                cleared
            }
        };
        if changed {
            self.revision += 1;
        }
        debug!(
            action = action_name,
            changed,
            revision = self.revision,
            "board action applied"
        );
        changed
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    pub fn contacted(&self) -> &ContactedSet {
        &self.contacted
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Incremented on every select, including reselecting the current employer.
    pub fn focus_serial(&self) -> u64 {
        self.focus_serial
    }

    pub fn visible(&self) -> Vec<&EmployerRecord> {
        apply_filter(self.dataset.records(), &self.filter)
    }

    /// The selected employer, if it is part of the filtered subset.
    pub fn selected_visible(&self) -> Option<&EmployerRecord> {
        let id = self.selection.selected_id()?;
        self.dataset
            .get(id)
            .filter(|record| self.filter.matches(record))
    }

    pub fn list_cards(&self) -> Vec<ListCard<'_>> {
        self.visible()
            .into_iter()
            .map(|record| {
                ListCard::new(
                    record,
                    self.contacted.is_contacted(&record.id),
                    self.selection.is_selected(&record.id),
                )
            })
            .collect()
    }

    pub fn map_markers(&self) -> Vec<MapMarker<'_>> {
        self.visible()
            .into_iter()
            .map(|record| MapMarker::new(record, self.selection.is_selected(&record.id)))
            .collect()
    }

    pub fn notify(&self, observers: &mut [&mut dyn BoardObserver]) {
        for observer in observers.iter_mut() {
            observer.observe(self);
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
