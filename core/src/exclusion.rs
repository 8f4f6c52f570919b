//! Per-application exclusion gate.
//!
//! Users keep a set of application identifiers the IME must never touch
//! (terminals, password managers, other IMEs). The check runs once per
//! keystroke, so membership is an O(1) set lookup with no I/O. Mutations
//! arrive only from the configuration boundary, never from the hot path.

use ahash::AHashSet;
use parking_lot::RwLock;

/// Membership filter over excluded application identifiers.
#[derive(Debug, Default)]
pub struct ExclusionFilter {
    apps: RwLock<AHashSet<String>>,
}

impl ExclusionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from an initial identifier list.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let filter = Self::new();
        filter.replace_all(ids);
        filter
    }

    /// Hot-path check: is `app_id` excluded from interception?
    pub fn is_excluded(&self, app_id: &str) -> bool {
        self.apps.read().contains(app_id)
    }

    /// Add an identifier. Returns false if it was already present.
    pub fn insert(&self, app_id: impl Into<String>) -> bool {
        self.apps.write().insert(app_id.into())
    }

    /// Remove an identifier. Returns true if it was present.
    pub fn remove(&self, app_id: &str) -> bool {
        self.apps.write().remove(app_id)
    }

    /// Replace the whole set, e.g. after the UI edited the list.
    pub fn replace_all<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut apps = self.apps.write();
        apps.clear();
        apps.extend(ids.into_iter().map(Into::into));
    }

    /// Snapshot of the current identifiers, sorted for stable display.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.apps.read().iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.apps.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.read().is_empty()
    }
}
