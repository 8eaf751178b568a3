use std::collections::HashSet;

use chrono::NaiveDate;

use crate::activity::Activity;
use crate::filter::{filter_activities, FilterState};
use crate::select::pick_random;

/// A headless browsing session: an immutable snapshot of the catalog, the
/// user's filter choices, and their favorites.
///
/// Everything here is pure in-memory state. A fresh fetch from the store
/// replaces the snapshot wholesale; the favorites set is loaded from and
/// saved to wherever the embedding application keeps it.
pub struct BrowseSession {
    activities: Vec<Activity>,
    filters: FilterState,
    favorites: HashSet<String>,
}

impl BrowseSession {
    pub fn new(activities: Vec<Activity>, favorites: HashSet<String>, today: NaiveDate) -> Self {
        Self {
            activities,
            filters: FilterState::new(today),
            favorites,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    pub fn clear_filters(&mut self, today: NaiveDate) {
        self.filters.clear(today);
    }

    pub fn favorites(&self) -> &HashSet<String> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Add if absent, remove if present.
    pub fn toggle_favorite(&mut self, id: &str) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.to_string());
        }
    }

    /// The filtered, name-sorted view of the snapshot.
    pub fn filtered(&self) -> Vec<&Activity> {
        filter_activities(&self.activities, &self.filters, &self.favorites)
    }

    /// "Surprends-moi !": one uniform random pick from the filtered list,
    /// `None` when nothing matches.
    pub fn surprise(&self) -> Option<&Activity> {
        let candidates = self.filtered();
        pick_random(&candidates).copied()
    }

    /// Swap in a freshly fetched snapshot (after a CRUD mutation). Filters
    /// and favorites carry over untouched.
    pub fn replace_snapshot(&mut self, activities: Vec<Activity>) {
        self.activities = activities;
    }
}
