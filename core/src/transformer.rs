//! The transformer boundary.
//!
//! The linguistic engine that actually places Vietnamese diacritics is an
//! external collaborator: a pure function from (key code, modifiers, current
//! buffer text) to new buffer text, stateless except for an explicit reset.
//! The interception engine only ever talks to this trait; test doubles and
//! the demo stand-in live on the other side of it.

use crate::key_event::Modifiers;
use crate::{CodeTable, InputMethod, Language};

/// External diacritic-placement engine.
pub trait Transformer: Send {
    /// Drop any internal composition state.
    fn reset(&mut self);

    /// Map a keystroke plus the current buffer text to the new buffer text.
    /// Returning the input unchanged means "nothing to rewrite".
    fn process(&mut self, key_code: u16, modifiers: Modifiers, current_text: &str) -> String;

    /// Switch the typing method. Implicitly resets.
    fn set_method(&mut self, method: InputMethod) {
        let _ = method;
        self.reset();
    }

    /// Switch between English pass-through and Vietnamese. Implicitly resets.
    fn set_language(&mut self, language: Language) {
        let _ = language;
        self.reset();
    }

    /// Select the output encoding table.
    fn set_code_table(&mut self, _table: CodeTable) {}

    /// Toggle spell-aware transformation.
    fn set_spell_check(&mut self, _enabled: bool) {}
}

/// Identity transformer: never rewrites anything. Useful as a wiring default
/// and for exercising the pass-through paths.
#[derive(Debug, Default)]
pub struct NullTransformer;

impl Transformer for NullTransformer {
    fn reset(&mut self) {}

    fn process(&mut self, _key_code: u16, _modifiers: Modifiers, current_text: &str) -> String {
        current_text.to_string()
    }
}
