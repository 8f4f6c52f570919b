//! Input-monitoring permission flow.
//!
//! Checking the capability is silent; requesting it may pop an OS dialog.
//! The engine itself only ever checks — this module hosts the request flow
//! that callers run when `start()` surfaces `PermissionDenied`, plus a probe
//! double for harnesses that do not talk to a real permission service.

use parking_lot::Mutex;
use tracing::{info, warn};

use vietkey_core::{CapabilityProbe, EngineError};

/// Probe with a fixed or prompt-grantable capability state.
#[derive(Debug)]
pub struct StaticProbe {
    granted: Mutex<bool>,
    grant_on_request: bool,
}

impl StaticProbe {
    /// Capability already granted.
    pub fn granted() -> Self {
        Self {
            granted: Mutex::new(true),
            grant_on_request: true,
        }
    }

    /// Capability missing and the user will refuse the prompt.
    pub fn denied() -> Self {
        Self {
            granted: Mutex::new(false),
            grant_on_request: false,
        }
    }

    /// Capability missing until requested; `grant` is the user's answer.
    pub fn prompting(grant: bool) -> Self {
        Self {
            granted: Mutex::new(false),
            grant_on_request: grant,
        }
    }
}

impl CapabilityProbe for StaticProbe {
    fn has_input_monitoring(&self) -> bool {
        *self.granted.lock()
    }

    fn request_input_monitoring(&self) -> bool {
        if self.grant_on_request {
            *self.granted.lock() = true;
        }
        *self.granted.lock()
    }
}

/// Make sure input monitoring is available, running the request flow (which
/// may prompt) when it is not. Returns `PermissionDenied` when the user
/// refuses, so callers can point at the system settings pane.
pub fn ensure_input_monitoring(probe: &dyn CapabilityProbe) -> Result<(), EngineError> {
    if probe.has_input_monitoring() {
        return Ok(());
    }
    info!("input monitoring not granted, requesting");
    if probe.request_input_monitoring() {
        return Ok(());
    }
    warn!("input monitoring request refused");
    Err(EngineError::PermissionDenied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granted_probe_passes() {
        assert!(ensure_input_monitoring(&StaticProbe::granted()).is_ok());
    }

    #[test]
    fn test_prompt_grants() {
        let probe = StaticProbe::prompting(true);
        assert!(!probe.has_input_monitoring());
        assert!(ensure_input_monitoring(&probe).is_ok());
        assert!(probe.has_input_monitoring());
    }

    #[test]
    fn test_refused_prompt_surfaces_denied() {
        let err = ensure_input_monitoring(&StaticProbe::denied()).unwrap_err();
        assert!(matches!(err, EngineError::PermissionDenied));
    }
}
