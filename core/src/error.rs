//! Error taxonomy for the interception engine.
//!
//! Failures split into two classes: errors fatal to `start()` (the OS refused
//! to let us observe or create the hook) and per-keystroke errors that degrade
//! to pass-through or a buffer reset. Nothing here may terminate the host
//! process. A stale-buffer discard is deliberately not represented: it is an
//! internal invariant repair, logged at debug level by the engine.

use thiserror::Error;

/// Errors surfaced by the interception engine and its collaborators.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The OS has not granted the input-monitoring capability. Fatal to
    /// `start()`; recoverable by user action, so callers must surface it and
    /// run the permission-request flow rather than swallowing it.
    #[error("input monitoring permission denied")]
    PermissionDenied,

    /// The OS refused to create the interception handle. Fatal to `start()`.
    #[error("failed to install input hook: {0}")]
    HookInstallFailed(String),

    /// A key event could not be mapped to a literal character. Recoverable:
    /// that keystroke passes through untouched and the buffer is unchanged.
    #[error("no layout translation for key code {0}")]
    LayoutTranslationFailed(u16),

    /// The system input queue rejected a synthetic event.
    #[error("synthetic event rejected by the input queue: {0}")]
    InjectionRejected(String),

    /// A synthetic event failed to post mid-plan. The remainder of the plan
    /// is aborted and the engine forces a buffer reset, preferring an
    /// under-corrected buffer over corrupting the user's document.
    #[error("replay aborted after {posted} synthetic events")]
    ReplayPartialFailure { posted: usize },
}

/// Convenience alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
