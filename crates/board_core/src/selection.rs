use shared::domain::EmployerId;

/// The single employer focused across the list and map views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(EmployerId),
}

impl Selection {
    /// Returns `true` when the selected id changed.
    pub fn select(&mut self, id: &EmployerId) -> bool {
        if self.is_selected(id) {
            return false;
        }
        *self = Selection::Selected(id.clone());
        true
    }

    /// Returns `true` when something was deselected.
    pub fn deselect(&mut self) -> bool {
        matches!(std::mem::take(self), Selection::Selected(_))
    }

    /// Deselects only if `id` is still the current selection, so a popup that
    /// closes after another employer was picked cannot clear the newer choice.
    pub fn close_popup(&mut self, id: &EmployerId) -> bool {
        if self.is_selected(id) {
            self.deselect()
        } else {
            false
        }
    }

    pub fn selected_id(&self) -> Option<&EmployerId> {
        match self {
            Selection::Selected(id) => Some(id),
            Selection::Unselected => None,
        }
    }

    pub fn is_selected(&self, id: &EmployerId) -> bool {
        self.selected_id() == Some(id)
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
