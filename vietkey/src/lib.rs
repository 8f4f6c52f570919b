//! vietkey crate root
//!
//! Host-side pipeline composing `vietkey-core` into a runnable IME harness:
//! TOML configuration, the single-consumer event pump, a simulated screen
//! target and a demo transformer standing in for the external diacritic
//! engine.
//!
//! Public API exported here:
//! - `VietkeyConfig` from `config`
//! - `EventPump`, `PumpHandle`, `LoopbackHook` from `pump`
//! - `ScreenBuffer` from `screen`
//! - `DemoTransformer` from `demo`
//! - `StaticProbe` and `ensure_input_monitoring` from `permission`

pub mod config;
pub mod demo;
pub mod permission;
pub mod pump;
pub mod screen;

// Re-export the core engine types callers need alongside the host pieces.
pub use vietkey_core::{
    keycodes, key_code_for, BufferState, CapabilityProbe, CodeTable, CompositionBuffer,
    EngineError, EngineSettings, EventInjector, EventSource, ExclusionFilter, FocusTracker,
    InputMethod, InterceptionEngine, KeyEvent, KeyEventKind, KeyHook, KeyResult, KeyboardLayout,
    Language, Modifiers, NullTransformer, OutputSink, ReplayEngine, ReplayPlan, TextClient,
    Transformer, UsQwertyLayout,
};

pub use config::VietkeyConfig;
pub use demo::DemoTransformer;
pub use permission::{ensure_input_monitoring, StaticProbe};
pub use pump::{EventPump, LoopbackHook, PumpEvent, PumpHandle};
pub use screen::ScreenBuffer;

use std::sync::Arc;

/// Wire up an engine against the demo transformer and a simulated screen.
///
/// The returned screen handle shares state with the injector the engine
/// owns, so harnesses can inspect what reached the "application".
pub fn create_demo_engine(config: &VietkeyConfig) -> (Arc<InterceptionEngine>, ScreenBuffer) {
    let screen = ScreenBuffer::new();
    let engine = InterceptionEngine::new(
        Box::new(DemoTransformer::new()),
        Box::new(screen.clone()),
        Box::new(LoopbackHook::new()),
        Arc::new(StaticProbe::granted()),
    )
    .with_settings(config.base().clone());
    config.apply_exclusions(&engine.exclusions());
    (Arc::new(engine), screen)
}
