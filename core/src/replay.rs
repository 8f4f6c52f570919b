//! Replay plans and their execution.
//!
//! A `ReplayPlan` is the minimal delete-then-insert edit that reconciles the
//! text visible on screen with the transformer's output. Plans are ephemeral
//! values computed per keystroke; the whole-buffer diff is acceptable because
//! the composition cap bounds its cost.

use unicode_normalization::UnicodeNormalization;

use crate::error::{EngineError, Result};
use crate::key_event::keycodes;
use crate::sink::OutputSink;

/// The minimal edit from one buffer text to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayPlan {
    /// Trailing scalars to delete from the visible text.
    pub delete_count: usize,
    /// Text to insert after the deletions, NFC-normalized.
    pub insert_text: String,
}

impl ReplayPlan {
    /// Diff `old` against `new` by scalar-wise common prefix.
    pub fn between(old: &str, new: &str) -> Self {
        let old_scalars: Vec<char> = old.chars().collect();
        let new_scalars: Vec<char> = new.chars().collect();
        let common = old_scalars
            .iter()
            .zip(new_scalars.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let insert: String = new_scalars[common..].iter().collect();
        Self {
            delete_count: old_scalars.len() - common,
            insert_text: insert.nfc().collect(),
        }
    }

    /// A plan that neither deletes nor inserts.
    pub fn is_noop(&self) -> bool {
        self.delete_count == 0 && self.insert_text.is_empty()
    }
}

/// Executes replay plans against an output sink.
///
/// For a cooperative client the edit collapses to one `set_marked_text`
/// call, which the protocol guarantees is atomic. For the synthetic injector
/// the deletions are posted strictly before the insertions, as paired
/// down/up events on the calling thread; the engine's serialization point
/// guarantees two plans never interleave.
pub struct ReplayEngine;

impl ReplayEngine {
    /// Apply `plan` to `sink`. Deletions are clamped to what the sink
    /// reports as deletable, so a plan can never eat into unrelated prior
    /// content. On a failed post the remainder of the plan is abandoned and
    /// `ReplayPartialFailure` is returned.
    pub fn apply(plan: &ReplayPlan, sink: &mut OutputSink<'_>) -> Result<()> {
        let delete_count = match sink.deletable_len() {
            Some(deletable) => plan.delete_count.min(deletable),
            None => plan.delete_count,
        };

        match sink {
            OutputSink::Cooperative(client) => {
                let current = client.composed_text();
                let kept_len = current.chars().count().saturating_sub(delete_count);
                let mut next: String = current.chars().take(kept_len).collect();
                next.push_str(&plan.insert_text);

                if next.is_empty() {
                    // An empty composition ends the episode: the pending text
                    // becomes ordinary document text.
                    if !current.is_empty() {
                        client.commit_text(&current);
                    }
                    client.set_marked_text("", 0);
                } else {
                    let caret = next.chars().count();
                    client.set_marked_text(&next, caret);
                }
                Ok(())
            }
            OutputSink::Synthetic(injector) => {
                fn track(res: Result<()>, posted: &mut usize) -> Result<()> {
                    match res {
                        Ok(()) => {
                            *posted += 1;
                            Ok(())
                        }
                        Err(err) => {
                            tracing::warn!(%err, posted = *posted, "synthetic post failed");
                            Err(EngineError::ReplayPartialFailure { posted: *posted })
                        }
                    }
                }

                let mut posted = 0usize;
                for _ in 0..delete_count {
                    track(injector.post_key_code(keycodes::DELETE, true), &mut posted)?;
                    track(injector.post_key_code(keycodes::DELETE, false), &mut posted)?;
                }
                for ch in plan.insert_text.chars() {
                    track(injector.post_unicode(ch, true), &mut posted)?;
                    track(injector.post_unicode(ch, false), &mut posted)?;
                }
                Ok(())
            }
        }
    }
}
