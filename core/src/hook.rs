//! Consumed OS boundaries: the global key hook and the input-monitoring
//! capability.
//!
//! The engine never talks to the OS directly. The hook trait models the
//! lifecycle of a low-level event tap (create, enable, invalidate); the
//! capability probe models the permission service, where checking is silent
//! but requesting may show an OS prompt. Both are injected at engine
//! construction so tests and the demo harness can substitute doubles.

use crate::error::Result;

/// Lifecycle of the global low-level key hook.
pub trait KeyHook: Send {
    /// Create and enable the hook. Failure here is fatal to engine start.
    fn install(&mut self) -> Result<()>;

    /// Disable and release the hook. Must be idempotent.
    fn uninstall(&mut self);

    fn is_installed(&self) -> bool;
}

/// The OS permission service for observing and synthesizing input.
pub trait CapabilityProbe: Send + Sync {
    /// Silent check, no prompt.
    fn has_input_monitoring(&self) -> bool;

    /// May trigger an OS prompt; returns the resulting grant state.
    fn request_input_monitoring(&self) -> bool;
}

#[cfg(test)]
pub(crate) mod doubles {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Hook double that succeeds and records its installed flag.
    #[derive(Default)]
    pub struct FlagHook {
        installed: bool,
    }

    impl KeyHook for FlagHook {
        fn install(&mut self) -> Result<()> {
            self.installed = true;
            Ok(())
        }

        fn uninstall(&mut self) {
            self.installed = false;
        }

        fn is_installed(&self) -> bool {
            self.installed
        }
    }

    /// Hook double whose installation always fails.
    pub struct RefusingHook;

    impl KeyHook for RefusingHook {
        fn install(&mut self) -> Result<()> {
            Err(crate::error::EngineError::HookInstallFailed(
                "event tap refused".into(),
            ))
        }

        fn uninstall(&mut self) {}

        fn is_installed(&self) -> bool {
            false
        }
    }

    /// Probe double with a fixed grant state.
    pub struct FixedProbe {
        granted: AtomicBool,
        grant_on_request: bool,
    }

    impl FixedProbe {
        pub fn granted() -> Self {
            Self {
                granted: AtomicBool::new(true),
                grant_on_request: true,
            }
        }

        pub fn denied() -> Self {
            Self {
                granted: AtomicBool::new(false),
                grant_on_request: false,
            }
        }
    }

    impl CapabilityProbe for FixedProbe {
        fn has_input_monitoring(&self) -> bool {
            self.granted.load(Ordering::SeqCst)
        }

        fn request_input_monitoring(&self) -> bool {
            if self.grant_on_request {
                self.granted.store(true, Ordering::SeqCst);
            }
            self.granted.load(Ordering::SeqCst)
        }
    }
}
