//! Composition buffer: the per-focus text state machine.
//!
//! The buffer holds the text produced so far for the current composition
//! episode. Its lifetime is tied to application focus: there is at most one
//! live buffer per process, and its owner must equal the current foreground
//! application at the time of any mutation. A buffer whose owner no longer
//! matches is `Stale` and collapses to `Empty` on the next access.

/// Which integration level produced the current composition episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// A text-input client speaking the marked-text protocol.
    Cooperative,
    /// The fallback global low-level key hook.
    Global,
}

/// Observable state of the buffer relative to the current foreground app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferState {
    /// No composition in progress.
    Empty,
    /// Non-empty text, awaiting further keystrokes.
    Composing,
    /// Owner no longer matches the foreground app; transient, collapsed to
    /// `Empty` before the next mutation.
    Stale,
}

/// Upper bound on composition length in Unicode scalars. Exceeding it forces
/// a reset, which bounds the diff cost and matches natural word boundaries.
pub const MAX_COMPOSITION_SCALARS: usize = 64;

/// Mutable composition state for the current focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionBuffer {
    text: String,
    owner_app_id: String,
    session_kind: SessionKind,
}

impl CompositionBuffer {
    /// Create an empty buffer with no owner.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            owner_app_id: String::new(),
            session_kind: SessionKind::Global,
        }
    }

    /// The composed text so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Identifier of the application this buffer belongs to.
    pub fn owner_app_id(&self) -> &str {
        &self.owner_app_id
    }

    pub fn session_kind(&self) -> SessionKind {
        self.session_kind
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in Unicode scalars, the unit the cap and replay plans use.
    pub fn len_scalars(&self) -> usize {
        self.text.chars().count()
    }

    /// State relative to `current_app`.
    pub fn state(&self, current_app: &str) -> BufferState {
        if self.text.is_empty() {
            BufferState::Empty
        } else if self.owner_app_id != current_app {
            BufferState::Stale
        } else {
            BufferState::Composing
        }
    }

    /// Prepare the buffer for a keystroke owned by `owner`. A stale buffer
    /// (different owner) is discarded here; a matching owner keeps its text.
    /// Returns true when stale text was discarded.
    pub fn begin_for(&mut self, owner: &str, kind: SessionKind) -> bool {
        let discarded = self.owner_app_id != owner && !self.text.is_empty();
        if self.owner_app_id != owner {
            self.text.clear();
            self.owner_app_id = owner.to_string();
        }
        self.session_kind = kind;
        discarded
    }

    /// Return to `Empty` for the same owner. Idempotent.
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Append one accepted literal character. Returns false when the cap was
    /// hit, in which case the buffer has been reset to `Empty`.
    pub fn push(&mut self, ch: char) -> bool {
        if self.len_scalars() + 1 > MAX_COMPOSITION_SCALARS {
            self.reset();
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Drop the last scalar (backspace observed with an identity transform).
    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// Replace the text with a transformer result. Returns false when the
    /// result exceeds the cap, in which case the buffer has been reset.
    pub fn set_text(&mut self, text: String) -> bool {
        if text.chars().count() > MAX_COMPOSITION_SCALARS {
            self.reset();
            return false;
        }
        self.text = text;
        true
    }
}

impl Default for CompositionBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let buf = CompositionBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.state(""), BufferState::Empty);
    }

    #[test]
    fn test_empty_to_composing() {
        let mut buf = CompositionBuffer::new();
        buf.begin_for("com.example.editor", SessionKind::Global);
        assert!(buf.push('v'));
        assert_eq!(buf.state("com.example.editor"), BufferState::Composing);
        assert_eq!(buf.text(), "v");
    }

    #[test]
    fn test_stale_on_owner_mismatch() {
        let mut buf = CompositionBuffer::new();
        buf.begin_for("app.a", SessionKind::Global);
        buf.push('x');
        assert_eq!(buf.state("app.b"), BufferState::Stale);

        // begin_for the new owner collapses the stale text
        let discarded = buf.begin_for("app.b", SessionKind::Global);
        assert!(discarded);
        assert!(buf.is_empty());
        assert_eq!(buf.owner_app_id(), "app.b");
    }

    #[test]
    fn test_begin_for_same_owner_keeps_text() {
        let mut buf = CompositionBuffer::new();
        buf.begin_for("app.a", SessionKind::Cooperative);
        buf.push('a');
        let discarded = buf.begin_for("app.a", SessionKind::Cooperative);
        assert!(!discarded);
        assert_eq!(buf.text(), "a");
    }

    #[test]
    fn test_reset_idempotent() {
        let mut buf = CompositionBuffer::new();
        buf.begin_for("app.a", SessionKind::Global);
        buf.push('a');
        buf.reset();
        let once = buf.clone();
        buf.reset();
        assert_eq!(buf, once);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_cap_forces_reset_on_push() {
        let mut buf = CompositionBuffer::new();
        buf.begin_for("app.a", SessionKind::Global);
        for _ in 0..MAX_COMPOSITION_SCALARS {
            assert!(buf.push('a'));
        }
        assert_eq!(buf.len_scalars(), MAX_COMPOSITION_SCALARS);
        assert!(!buf.push('a'));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_cap_forces_reset_on_set_text() {
        let mut buf = CompositionBuffer::new();
        buf.begin_for("app.a", SessionKind::Global);
        let long = "a".repeat(MAX_COMPOSITION_SCALARS + 1);
        assert!(!buf.set_text(long));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_pop() {
        let mut buf = CompositionBuffer::new();
        buf.begin_for("app.a", SessionKind::Global);
        buf.push('â');
        buf.push('n');
        buf.pop();
        assert_eq!(buf.text(), "â");
        buf.pop();
        buf.pop();
        assert!(buf.is_empty());
    }
}
