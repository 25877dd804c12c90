//! Fetched-collection state shared by list views.
//!
//! DESIGN
//! ======
//! Every list view follows the same cycle: start a fetch, replace the items
//! with the response or record an error string, then patch single records in
//! place after mutations instead of refetching everything.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::api::ApiError;
use crate::net::types::Identified;

/// A fetched collection plus its loading and error flags.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

impl<T> Listing<T> {
    /// Mark a fetch as in flight. Existing items stay visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result. Failed fetches keep the previous items.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Identified> Listing<T> {
    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace the record with the same id, or append it.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Apply `patch` to the record with `id`. Returns whether it was found.
    pub fn patch(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                patch(item);
                true
            }
            None => false,
        }
    }

    /// Drop the record with `id`. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }
}
