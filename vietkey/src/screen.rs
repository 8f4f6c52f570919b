//! Simulated visible-text target.
//!
//! `ScreenBuffer` plays the role of the focused application: it implements
//! both output boundaries, interpreting synthetic key events the way the OS
//! input queue would (backspace deletes, Unicode payloads insert) and the
//! marked-text protocol the way a cooperative text field would. The demo CLI
//! renders it; the integration tests assert against it.

use std::sync::Arc;

use parking_lot::Mutex;

use vietkey_core::{keycodes, EngineError, EventInjector, TextClient};

#[derive(Debug, Default)]
struct ScreenState {
    /// Finalized document text.
    committed: String,
    /// Current marked (composed) range, always trailing the committed text.
    marked: String,
    posts: usize,
    fail_after: Option<usize>,
}

/// Cloneable handle to a simulated screen. All clones share one state, so
/// the engine can own one as its injector while the harness keeps another
/// for inspection.
#[derive(Debug, Clone, Default)]
pub struct ScreenBuffer {
    inner: Arc<Mutex<ScreenState>>,
}

impl ScreenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything currently visible: committed text followed by the marked
    /// range.
    pub fn visible(&self) -> String {
        let state = self.inner.lock();
        format!("{}{}", state.committed, state.marked)
    }

    pub fn committed(&self) -> String {
        self.inner.lock().committed.clone()
    }

    pub fn marked(&self) -> String {
        self.inner.lock().marked.clone()
    }

    /// Number of synthetic events accepted so far.
    pub fn posts(&self) -> usize {
        self.inner.lock().posts
    }

    /// Simulate the application inserting a keystroke the engine passed
    /// through.
    pub fn echo_char(&self, ch: char) {
        self.inner.lock().committed.push(ch);
    }

    /// Simulate the application handling a passed-through backspace.
    pub fn echo_backspace(&self) {
        self.inner.lock().committed.pop();
    }

    /// Make the injector reject posts once `n` events have been accepted.
    /// Simulates a saturated or revoked input queue.
    pub fn fail_after(&self, n: Option<usize>) {
        self.inner.lock().fail_after = n;
    }

    pub fn clear(&self) {
        let mut state = self.inner.lock();
        state.committed.clear();
        state.marked.clear();
        state.posts = 0;
    }

    fn accept_post(state: &mut ScreenState) -> Result<(), EngineError> {
        if let Some(limit) = state.fail_after {
            if state.posts >= limit {
                return Err(EngineError::InjectionRejected("input queue closed".into()));
            }
        }
        state.posts += 1;
        Ok(())
    }
}

impl EventInjector for ScreenBuffer {
    fn post_unicode(&mut self, ch: char, key_down: bool) -> Result<(), EngineError> {
        let mut state = self.inner.lock();
        Self::accept_post(&mut state)?;
        if key_down {
            state.committed.push(ch);
        }
        Ok(())
    }

    fn post_key_code(&mut self, key_code: u16, key_down: bool) -> Result<(), EngineError> {
        let mut state = self.inner.lock();
        Self::accept_post(&mut state)?;
        if key_down && key_code == keycodes::DELETE {
            state.committed.pop();
        }
        Ok(())
    }
}

impl TextClient for ScreenBuffer {
    fn composed_text(&self) -> String {
        self.inner.lock().marked.clone()
    }

    fn set_marked_text(&mut self, text: &str, _caret: usize) {
        self.inner.lock().marked = text.to_string();
    }

    fn commit_text(&mut self, text: &str) {
        let mut state = self.inner.lock();
        state.committed.push_str(text);
        state.marked.clear();
    }
}
