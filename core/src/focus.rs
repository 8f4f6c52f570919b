//! Foreground-application tracking.
//!
//! The tracker keeps the identifier of the application that currently has
//! keyboard focus, fed by OS activation notifications. Duplicate
//! notifications for the same identifier are debounced: the engine derives
//! buffer resets from focus changes, and a spurious reset would drop an
//! in-progress composition.

use parking_lot::Mutex;
use tracing::trace;

/// Debounced snapshot of the foreground application.
#[derive(Debug, Default)]
pub struct FocusTracker {
    current: Mutex<Option<String>>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an activation notification. Returns true only when focus
    /// actually moved to a different application.
    pub fn app_activated(&self, app_id: &str) -> bool {
        let mut current = self.current.lock();
        match current.as_deref() {
            Some(existing) if existing == app_id => false,
            _ => {
                trace!(app_id, "focus changed");
                *current = Some(app_id.to_string());
                true
            }
        }
    }

    /// Identifier of the application currently in front, if any activation
    /// has been observed yet.
    pub fn current_app(&self) -> Option<String> {
        self.current.lock().clone()
    }

    /// Launch notifications do not move focus; only logged.
    pub fn app_launched(&self, app_id: &str) {
        trace!(app_id, "app launched");
    }

    /// If the foreground app terminates, the snapshot is cleared so the next
    /// activation is always treated as a change.
    pub fn app_terminated(&self, app_id: &str) {
        let mut current = self.current.lock();
        if current.as_deref() == Some(app_id) {
            trace!(app_id, "foreground app terminated");
            *current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_activation_changes_focus() {
        let tracker = FocusTracker::new();
        assert_eq!(tracker.current_app(), None);
        assert!(tracker.app_activated("app.a"));
        assert_eq!(tracker.current_app(), Some("app.a".to_string()));
    }

    #[test]
    fn test_duplicate_activation_debounced() {
        let tracker = FocusTracker::new();
        assert!(tracker.app_activated("app.a"));
        assert!(!tracker.app_activated("app.a"));
        assert!(tracker.app_activated("app.b"));
        assert!(tracker.app_activated("app.a"));
    }

    #[test]
    fn test_terminated_clears_only_foreground() {
        let tracker = FocusTracker::new();
        tracker.app_activated("app.a");
        tracker.app_terminated("app.b");
        assert_eq!(tracker.current_app(), Some("app.a".to_string()));
        tracker.app_terminated("app.a");
        assert_eq!(tracker.current_app(), None);
        assert!(tracker.app_activated("app.a"));
    }
}
