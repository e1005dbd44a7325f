use crate::app::results::ResultGroup;
use crate::domain::models::{Prefix, ResultItem};

/// Classified results plus the keyboard selection, flattened across groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsPanelState {
    pub groups: Vec<ResultGroup>,
    pub selected: usize,
}

impl ResultsPanelState {
    #[must_use]
    pub fn new(groups: Vec<ResultGroup>) -> Self {
        Self {
            groups,
            selected: 0,
        }
    }

    /// Total number of items across all groups.
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Resolve a flattened index to its category and item.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<(Prefix, &ResultItem)> {
        let mut remaining = index;
        for group in &self.groups {
            if remaining < group.items.len() {
                return Some((group.prefix, &group.items[remaining]));
            }
            remaining -= group.items.len();
        }
        None
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<(Prefix, &ResultItem)> {
        self.entry(self.selected)
    }

    pub fn select_next(&mut self) {
        let total = self.total();
        if total > 0 {
            self.selected = (self.selected + 1) % total;
        }
    }

    pub fn select_prev(&mut self) {
        let total = self.total();
        if total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(total - 1);
        }
    }
}
