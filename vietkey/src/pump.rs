//! The event pump: message-passing boundary in front of the engine.
//!
//! Native callbacks must return within a bounded latency budget, so the
//! OS-facing adapters do nothing but translate their payloads into values on
//! a single-consumer queue. One worker thread drains the queue and drives
//! the engine, which keeps every keystroke, focus change and settings switch
//! on the same serialized path.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Sender};
use tracing::{debug, trace};

use vietkey_core::{
    EngineError, EngineSettings, EventSource, InterceptionEngine, KeyEvent, KeyHook, KeyResult,
};

/// Messages accepted by the pump.
pub enum PumpEvent {
    /// A keystroke from the global hook adapter.
    Key(KeyEvent),
    /// Foreground application changed.
    FocusChanged(String),
    /// Foreground application terminated.
    AppTerminated(String),
    /// Replace the engine settings (reset-then-set, serialized like a key).
    Settings(EngineSettings),
    /// Rendezvous: the pump acknowledges once everything queued before this
    /// message has been processed.
    Flush(Sender<()>),
    /// Stop the worker.
    Shutdown,
}

/// Spawns and owns the engine worker loop.
pub struct EventPump;

impl EventPump {
    /// Spawn a pump whose key results are discarded (the common case: the
    /// hook adapter observed the result synchronously and only forwards).
    pub fn spawn(engine: Arc<InterceptionEngine>) -> PumpHandle {
        Self::spawn_with(engine, |_, _| {})
    }

    /// Spawn a pump with an observer called after every key event. The demo
    /// harness uses this to play the role of the focused application and
    /// echo passed-through keystrokes.
    pub fn spawn_with<F>(engine: Arc<InterceptionEngine>, mut on_key: F) -> PumpHandle
    where
        F: FnMut(&KeyEvent, KeyResult) + Send + 'static,
    {
        let (tx, rx) = unbounded::<PumpEvent>();
        let join = thread::spawn(move || {
            for event in rx.iter() {
                match event {
                    PumpEvent::Key(key) => {
                        let result = engine.on_key_event(&key, EventSource::GlobalHook);
                        trace!(?key, ?result, "pump processed key");
                        on_key(&key, result);
                    }
                    PumpEvent::FocusChanged(app_id) => engine.notify_app_activated(&app_id),
                    PumpEvent::AppTerminated(app_id) => engine.notify_app_terminated(&app_id),
                    PumpEvent::Settings(settings) => engine.update_settings(settings),
                    PumpEvent::Flush(ack) => {
                        let _ = ack.send(());
                    }
                    PumpEvent::Shutdown => break,
                }
            }
            debug!("event pump stopped");
        });

        PumpHandle {
            tx,
            join: Some(join),
        }
    }
}

/// Handle to a running pump. Dropping it shuts the worker down.
pub struct PumpHandle {
    tx: Sender<PumpEvent>,
    join: Option<JoinHandle<()>>,
}

impl PumpHandle {
    /// A sender for adapters that feed the pump from OS callbacks.
    pub fn sender(&self) -> Sender<PumpEvent> {
        self.tx.clone()
    }

    pub fn send_key(&self, event: KeyEvent) {
        let _ = self.tx.send(PumpEvent::Key(event));
    }

    pub fn send_focus(&self, app_id: impl Into<String>) {
        let _ = self.tx.send(PumpEvent::FocusChanged(app_id.into()));
    }

    /// Block until everything queued so far has been processed.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = unbounded();
        if self.tx.send(PumpEvent::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }

    /// Stop the worker and wait for it to exit.
    pub fn shutdown(mut self) {
        self.stop_worker();
    }

    fn stop_worker(&mut self) {
        if let Some(join) = self.join.take() {
            let _ = self.tx.send(PumpEvent::Shutdown);
            let _ = join.join();
        }
    }
}

impl Drop for PumpHandle {
    fn drop(&mut self) {
        self.stop_worker();
    }
}

/// Stand-in for the OS event tap when events arrive through the pump's
/// channel instead of a native callback. Installation only flips the enable
/// flag, mirroring the tap-enable lifecycle.
#[derive(Debug, Default)]
pub struct LoopbackHook {
    installed: bool,
}

impl LoopbackHook {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyHook for LoopbackHook {
    fn install(&mut self) -> Result<(), EngineError> {
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
