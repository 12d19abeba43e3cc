//! Shopping-list view state.

#[cfg(test)]
#[path = "grocery_test.rs"]
mod grocery_test;

use crate::net::types::GroceryItem;

/// Items plus loading/error bookkeeping for the shopping-list page.
///
/// Mutators apply backend outcomes locally so the page never refetches
/// the whole list after a single-item change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroceryState {
    pub items: Vec<GroceryItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl GroceryState {
    /// Replace the list with a fresh fetch result.
    pub fn loaded(&mut self, items: Vec<GroceryItem>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Insert a new item at the front (the list is newest-first) or
    /// replace an existing one with the same name.
    pub fn upsert(&mut self, item: GroceryItem) {
        match self.items.iter_mut().find(|i| i.name == item.name) {
            Some(slot) => *slot = item,
            None => self.items.insert(0, item),
        }
    }

    /// Tick or untick the named item; unknown names are ignored.
    pub fn set_completed(&mut self, name: &str, completed: bool) {
        if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
            item.completed = completed;
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.items.retain(|i| i.name != name);
    }

    /// Record a request failure and stop any loading indicator.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Drop everything, part of the logout teardown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
