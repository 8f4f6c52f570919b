//! Output sinks: where replayed edits land.
//!
//! A transformation can be committed two ways. A cooperative client speaks
//! the marked-text protocol and supports atomic in-place replacement. The
//! synthetic injector posts fabricated keyboard events into the system input
//! queue for targets that know nothing about composition. The engine holds
//! the two behind a tagged variant instead of a dynamically-typed client
//! parameter, so dispatch is explicit.

use crate::error::Result;

/// A text-input target implementing the marked-text/composition protocol.
pub trait TextClient {
    /// Text of the current composed (marked) range.
    fn composed_text(&self) -> String;

    /// Replace the composed range in place. `caret` is the scalar offset of
    /// the insertion point within `text`.
    fn set_marked_text(&mut self, text: &str, caret: usize);

    /// Finalize `text` into the document, ending the composition.
    fn commit_text(&mut self, text: &str);
}

/// Poster of fabricated keyboard events onto the system input queue.
pub trait EventInjector: Send {
    /// Post a key event carrying `ch` as a Unicode payload, independent of
    /// the physical keyboard layout.
    fn post_unicode(&mut self, ch: char, key_down: bool) -> Result<()>;

    /// Post a key event for a physical key code (used for deletions).
    fn post_key_code(&mut self, key_code: u16, key_down: bool) -> Result<()>;
}

/// The active output target for one replay plan.
pub enum OutputSink<'a> {
    /// Atomic replace-in-place via the composition protocol.
    Cooperative(&'a mut dyn TextClient),
    /// Per-character synthetic key events.
    Synthetic(&'a mut dyn EventInjector),
}

impl OutputSink<'_> {
    /// How many trailing scalars the sink can safely delete, when it knows.
    /// Cooperative clients report their composed range; the injector cannot
    /// see the target document and returns `None` (the plan is trusted).
    pub fn deletable_len(&self) -> Option<usize> {
        match self {
            OutputSink::Cooperative(client) => Some(client.composed_text().chars().count()),
            OutputSink::Synthetic(_) => None,
        }
    }
}
