//! vietkey-core
//!
//! Keystroke interception and composition-replay engine for a system-wide
//! Vietnamese IME. This crate captures keyboard events from two integration
//! levels (a cooperative marked-text client protocol and a fallback global
//! low-level hook), keeps a per-focus composition buffer, delegates diacritic
//! placement to an external transformer, and replays the minimal
//! delete-then-insert edit into the focused application.
//!
//! The linguistic rules themselves (Telex/VNI placement) are not here: they
//! sit behind the [`Transformer`] trait, consumed as an opaque service.
//!
//! Public API:
//! - `InterceptionEngine` - top-level orchestrator, one instance per process
//! - `CompositionBuffer` - the per-focus composition state machine
//! - `ReplayPlan` / `ReplayEngine` - minimal-edit computation and execution
//! - `OutputSink` / `TextClient` / `EventInjector` - output boundaries
//! - `ExclusionFilter` / `FocusTracker` - per-app gating and focus state
//! - `KeyHook` / `CapabilityProbe` - consumed OS boundaries
//! - `EngineSettings` - method/language/encoding switches

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::EngineError;

pub mod key_event;
pub use key_event::{keycodes, KeyEvent, KeyEventKind, Modifiers};

pub mod buffer;
pub use buffer::{BufferState, CompositionBuffer, SessionKind, MAX_COMPOSITION_SCALARS};

pub mod exclusion;
pub use exclusion::ExclusionFilter;

pub mod focus;
pub use focus::FocusTracker;

pub mod layout;
pub use layout::{key_code_for, KeyboardLayout, UsQwertyLayout};

pub mod transformer;
pub use transformer::{NullTransformer, Transformer};

pub mod sink;
pub use sink::{EventInjector, OutputSink, TextClient};

pub mod replay;
pub use replay::{ReplayEngine, ReplayPlan};

pub mod hook;
pub use hook::{CapabilityProbe, KeyHook};

pub mod engine;
pub use engine::{EventSource, InterceptionEngine, KeyResult};

/// Typing method for diacritic input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMethod {
    /// Letter-doubling and trailing-letter tone marks (aa, ee, s, f, ...).
    Telex,
    /// Digit-based tone and vowel marks (a6, a1, ...).
    Vni,
}

/// Active input language. English is a full pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    En,
    Vn,
}

/// Output encoding table for transformed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeTable {
    Unicode,
    Tcvn3,
    VniWindows,
}

/// Engine-level switches pushed into the transformer on change.
///
/// Changing any of these never affects an in-flight buffer except through a
/// forced reset, applied before the new value takes effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    pub input_method: InputMethod,
    pub language: Language,
    pub code_table: CodeTable,
    pub spell_check: bool,
    /// Master toggle: when false every event passes through untouched.
    pub enabled: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            input_method: InputMethod::Telex,
            language: Language::Vn,
            code_table: CodeTable::Unicode,
            spell_check: true,
            enabled: true,
        }
    }
}
