use std::collections::HashMap;

use shared::domain::EmployerId;

/// Per-employer "contacted" flags for the session. Absent entries read as
/// `false`; entries are flipped by [`ContactedSet::toggle`] and never removed.
#[derive(Debug, Clone, Default)]
pub struct ContactedSet {
    flags: HashMap<EmployerId, bool>,
}

impl ContactedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the flag for `id` and returns the new value.
    pub fn toggle(&mut self, id: &EmployerId) -> bool {
        let flag = self.flags.entry(id.clone()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn toggled(&self, id: &EmployerId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    pub fn is_contacted(&self, id: &EmployerId) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    pub fn contacted_count(&self) -> usize {
        self.flags.values().filter(|flag| **flag).count()
    }

    pub fn contacted_ids(&self) -> impl Iterator<Item = &EmployerId> {
        self.flags
            .iter()
            .filter_map(|(id, flag)| flag.then_some(id))
    }
}

// An explicit `false` entry and an absent entry mean the same thing.
impl PartialEq for ContactedSet {
    fn eq(&self, other: &Self) -> bool {
        self.contacted_count() == other.contacted_count()
            && self.contacted_ids().all(|id| other.is_contacted(id))
    }
}

impl Eq for ContactedSet {}

#[cfg(test)]
#[path = "tests/contacted_tests.rs"]
mod tests;
