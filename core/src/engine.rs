//! The interception engine: top-level orchestrator.
//!
//! One engine instance owns the composition buffer, the transformer, the
//! synthetic injector and the hook/permission boundaries, and wires them
//! together once per keystroke. Events arrive from two independent sources
//! (the global low-level hook and cooperative text-input clients); every
//! buffer mutation and every replay funnels through a single mutex-guarded
//! critical section, so two plans can never interleave. Nothing inside the
//! keystroke path blocks on I/O: the OS disables hooks that stall the input
//! pipeline.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::buffer::{BufferState, CompositionBuffer, SessionKind};
use crate::error::{EngineError, Result};
use crate::exclusion::ExclusionFilter;
use crate::focus::FocusTracker;
use crate::hook::{CapabilityProbe, KeyHook};
use crate::key_event::{keycodes, KeyEvent, KeyEventKind, Modifiers};
use crate::layout::{KeyboardLayout, UsQwertyLayout};
use crate::replay::{ReplayEngine, ReplayPlan};
use crate::sink::{EventInjector, OutputSink, TextClient};
use crate::transformer::Transformer;
use crate::{CodeTable, EngineSettings, InputMethod, Language};

/// Outcome of processing one key event.
///
/// `Handled` means the engine replayed an edit and the original event must
/// be suppressed; `NotHandled` means the event passes through to the target
/// application untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
}

/// Where a key event came from.
pub enum EventSource<'a> {
    /// The global low-level hook; the owning app comes from the focus
    /// tracker's last activation notification.
    GlobalHook,
    /// A cooperative text-input client, which implies its owning app and
    /// brings its own output sink.
    Cooperative {
        app_id: &'a str,
        client: &'a mut dyn TextClient,
    },
}

/// State behind the serialization point.
struct EngineCore {
    running: bool,
    settings: EngineSettings,
    buffer: CompositionBuffer,
    transformer: Box<dyn Transformer>,
    injector: Box<dyn EventInjector>,
    layout: Box<dyn KeyboardLayout>,
}

impl EngineCore {
    fn reset_composition(&mut self) {
        self.buffer.reset();
        self.transformer.reset();
    }
}

/// Keystroke interception and composition-replay engine.
///
/// Construct with [`InterceptionEngine::new`], passing the external
/// collaborators; call [`start`](Self::start) to install the hook, feed
/// events through [`on_key_event`](Self::on_key_event) and focus changes
/// through [`notify_app_activated`](Self::notify_app_activated).
pub struct InterceptionEngine {
    core: Mutex<EngineCore>,
    hook: Mutex<Box<dyn KeyHook>>,
    probe: Arc<dyn CapabilityProbe>,
    focus: Arc<FocusTracker>,
    exclusions: Arc<ExclusionFilter>,
}

impl InterceptionEngine {
    /// Create an engine owning its dependencies. The transformer and the
    /// injector are the per-keystroke collaborators; the hook and the probe
    /// are consulted only by [`start`](Self::start)/[`stop`](Self::stop).
    pub fn new(
        transformer: Box<dyn Transformer>,
        injector: Box<dyn EventInjector>,
        hook: Box<dyn KeyHook>,
        probe: Arc<dyn CapabilityProbe>,
    ) -> Self {
        Self {
            core: Mutex::new(EngineCore {
                running: false,
                settings: EngineSettings::default(),
                buffer: CompositionBuffer::new(),
                transformer,
                injector,
                layout: Box::new(UsQwertyLayout::new()),
            }),
            hook: Mutex::new(hook),
            probe,
            focus: Arc::new(FocusTracker::new()),
            exclusions: Arc::new(ExclusionFilter::new()),
        }
    }

    /// Replace the default settings before starting.
    pub fn with_settings(self, settings: EngineSettings) -> Self {
        {
            let mut core = self.core.lock();
            let method = settings.input_method;
            let language = settings.language;
            let table = settings.code_table;
            let spell = settings.spell_check;
            core.settings = settings;
            core.transformer.set_method(method);
            core.transformer.set_language(language);
            core.transformer.set_code_table(table);
            core.transformer.set_spell_check(spell);
        }
        self
    }

    /// Replace the default US layout.
    pub fn with_layout(self, layout: Box<dyn KeyboardLayout>) -> Self {
        self.core.lock().layout = layout;
        self
    }

    /// The focus tracker fed by OS activation notifications.
    pub fn focus(&self) -> Arc<FocusTracker> {
        Arc::clone(&self.focus)
    }

    /// The exclusion filter exposed to the configuration boundary.
    pub fn exclusions(&self) -> Arc<ExclusionFilter> {
        Arc::clone(&self.exclusions)
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> EngineSettings {
        self.core.lock().settings.clone()
    }

    pub fn is_running(&self) -> bool {
        self.core.lock().running
    }

    /// Current composition text; diagnostics and tests only.
    pub fn composition_text(&self) -> String {
        self.core.lock().buffer.text().to_string()
    }

    /// Owner of the current composition; diagnostics and tests only.
    pub fn composition_owner(&self) -> String {
        self.core.lock().buffer.owner_app_id().to_string()
    }

    /// Install the global hook and begin processing. Fails with
    /// [`EngineError::PermissionDenied`] when the OS has not granted input
    /// monitoring — callers must surface that and run the request flow — and
    /// with [`EngineError::HookInstallFailed`] when the tap cannot be
    /// created. Calling `start` on a running engine is a no-op.
    pub fn start(&self) -> Result<()> {
        let mut hook = self.hook.lock();
        if self.core.lock().running {
            return Ok(());
        }
        if !self.probe.has_input_monitoring() {
            warn!("input monitoring capability missing");
            return Err(EngineError::PermissionDenied);
        }
        hook.install()?;
        self.core.lock().running = true;
        info!("interception engine started");
        Ok(())
    }

    /// Remove the hook and release session state. Idempotent, and safe to
    /// call concurrently with an in-flight keystroke: once `stop` returns,
    /// no further replay occurs.
    pub fn stop(&self) {
        let mut hook = self.hook.lock();
        {
            let mut core = self.core.lock();
            if !core.running && !hook.is_installed() {
                return;
            }
            core.running = false;
            core.reset_composition();
        }
        hook.uninstall();
        info!("interception engine stopped");
    }

    /// Explicit composition reset, serialized with keystroke processing.
    pub fn reset(&self) {
        self.core.lock().reset_composition();
    }

    /// Process one key event from either source. Returns whether the
    /// original event must be suppressed.
    pub fn on_key_event(&self, event: &KeyEvent, source: EventSource<'_>) -> KeyResult {
        let mut core = self.core.lock();
        let core = &mut *core;
        if !core.running || !core.settings.enabled {
            return KeyResult::NotHandled;
        }

        // Cooperative events imply their owner; hook events rely on the last
        // activation notification.
        let (current_app, kind) = match &source {
            EventSource::GlobalHook => (
                self.focus.current_app().unwrap_or_default(),
                SessionKind::Global,
            ),
            EventSource::Cooperative { app_id, .. } => {
                self.focus.app_activated(app_id);
                (app_id.to_string(), SessionKind::Cooperative)
            }
        };

        // Hard invariant: excluded apps observe zero side effects.
        if self.exclusions.is_excluded(&current_app) {
            return KeyResult::NotHandled;
        }

        match event.kind {
            KeyEventKind::FlagsChanged => {
                // Control/option combinations belong to OS and app shortcuts.
                if event
                    .modifiers
                    .intersects(Modifiers::CONTROL | Modifiers::OPTION)
                {
                    core.reset_composition();
                }
                return KeyResult::NotHandled;
            }
            KeyEventKind::KeyUp => return KeyResult::NotHandled,
            KeyEventKind::KeyDown => {}
        }

        if core.buffer.state(&current_app) == BufferState::Stale {
            debug!(
                owner = core.buffer.owner_app_id(),
                current = %current_app,
                "stale buffer discarded"
            );
        }
        core.buffer.begin_for(&current_app, kind);

        if event.modifiers.is_shortcut() {
            core.reset_composition();
            return KeyResult::NotHandled;
        }
        if keycodes::is_break_key(event.key_code) {
            core.reset_composition();
            return KeyResult::NotHandled;
        }

        // Backspace yields no literal but must still reach the transformer,
        // which may shorten the composition in response.
        let literal = if event.key_code == keycodes::DELETE {
            None
        } else {
            match core.layout.translate(event.key_code, event.modifiers) {
                Ok(literal) => literal,
                Err(err) => {
                    // Recoverable: this keystroke passes through untouched.
                    debug!(%err, "layout translation failed");
                    return KeyResult::NotHandled;
                }
            }
        };

        let before = core.buffer.text().to_string();
        let result = core
            .transformer
            .process(event.key_code, event.modifiers, &before);

        if result != before {
            let plan = ReplayPlan::between(&before, &result);
            debug!(
                delete = plan.delete_count,
                insert = %plan.insert_text,
                "applying replay plan"
            );
            let mut sink = match source {
                EventSource::Cooperative { client, .. } => OutputSink::Cooperative(client),
                EventSource::GlobalHook => OutputSink::Synthetic(core.injector.as_mut()),
            };
            match ReplayEngine::apply(&plan, &mut sink) {
                Ok(()) => {
                    if result.is_empty() {
                        // Empty result is an explicit clear: the sink has
                        // finalized any pending text, the episode ends here.
                        core.reset_composition();
                    } else if !core.buffer.set_text(result) {
                        core.transformer.reset();
                    }
                    KeyResult::Handled
                }
                Err(err) => {
                    warn!(%err, "replay failed, resetting composition");
                    core.reset_composition();
                    match err {
                        // Something already reached the screen: suppress the
                        // original to avoid mixing raw input into the partial
                        // replay. With nothing posted, let the raw key land.
                        EngineError::ReplayPartialFailure { posted } if posted > 0 => {
                            KeyResult::Handled
                        }
                        _ => KeyResult::NotHandled,
                    }
                }
            }
        } else if event.key_code == keycodes::DELETE {
            // Identity transform on backspace: the app deletes one character
            // itself, mirror that in the buffer.
            core.buffer.pop();
            KeyResult::NotHandled
        } else if let Some(ch) = literal.filter(|c| c.is_alphabetic()) {
            if !core.buffer.push(ch) {
                core.transformer.reset();
            }
            KeyResult::NotHandled
        } else {
            // No rewrite and no appendable literal: digits, punctuation and
            // the like flow through without touching the buffer.
            KeyResult::NotHandled
        }
    }

    /// Foreground application changed. Debounced; on a real change the
    /// composition is dropped and the exclusion decision re-evaluated.
    pub fn notify_app_activated(&self, app_id: &str) {
        if !self.focus.app_activated(app_id) {
            return;
        }
        let excluded = self.exclusions.is_excluded(app_id);
        debug!(app_id, excluded, "foreground app changed");
        self.core.lock().reset_composition();
    }

    pub fn notify_app_launched(&self, app_id: &str) {
        self.focus.app_launched(app_id);
    }

    /// If the foreground app terminates its composition dies with it.
    pub fn notify_app_terminated(&self, app_id: &str) {
        let was_foreground = self.focus.current_app().as_deref() == Some(app_id);
        self.focus.app_terminated(app_id);
        if was_foreground {
            self.core.lock().reset_composition();
        }
    }

    /// Switch typing method (Telex/VNI): reset, then push to the transformer.
    pub fn set_input_method(&self, method: InputMethod) {
        let mut core = self.core.lock();
        info!(?method, "input method changed");
        core.buffer.reset();
        core.transformer.set_method(method);
        core.settings.input_method = method;
    }

    /// Switch language (EN pass-through / VN): reset, then push.
    pub fn set_language(&self, language: Language) {
        let mut core = self.core.lock();
        info!(?language, "language changed");
        core.buffer.reset();
        core.transformer.set_language(language);
        core.settings.language = language;
    }

    /// Switch the output encoding table: reset, then push.
    pub fn set_code_table(&self, table: CodeTable) {
        let mut core = self.core.lock();
        core.buffer.reset();
        core.transformer.set_code_table(table);
        core.settings.code_table = table;
    }

    pub fn set_spell_check(&self, enabled: bool) {
        let mut core = self.core.lock();
        core.transformer.set_spell_check(enabled);
        core.settings.spell_check = enabled;
    }

    /// Enable or disable interception without tearing down the hook.
    pub fn set_enabled(&self, enabled: bool) {
        let mut core = self.core.lock();
        info!(enabled, "interception toggled");
        if !enabled {
            core.reset_composition();
        }
        core.settings.enabled = enabled;
    }

    /// Apply a whole settings snapshot as one serialized reset-then-set.
    pub fn update_settings(&self, settings: EngineSettings) {
        let mut core = self.core.lock();
        core.reset_composition();
        core.transformer.set_method(settings.input_method);
        core.transformer.set_language(settings.language);
        core.transformer.set_code_table(settings.code_table);
        core.transformer.set_spell_check(settings.spell_check);
        core.settings = settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::doubles::{FixedProbe, FlagHook, RefusingHook};
    use crate::transformer::NullTransformer;
    use std::sync::Mutex as StdMutex;

    /// Transformer double driven by (current buffer text, result) rules.
    struct Scripted {
        rules: Vec<(&'static str, &'static str)>,
    }

    impl Scripted {
        fn new(rules: Vec<(&'static str, &'static str)>) -> Self {
            Self { rules }
        }
    }

    impl Transformer for Scripted {
        fn reset(&mut self) {}

        fn process(&mut self, _key_code: u16, _modifiers: Modifiers, current: &str) -> String {
            self.rules
                .iter()
                .find(|(from, _)| *from == current)
                .map(|(_, to)| to.to_string())
                .unwrap_or_else(|| current.to_string())
        }
    }

    /// Injector double recording every post through a shared handle.
    #[derive(Clone, Default)]
    struct SharedInjector {
        events: Arc<StdMutex<Vec<(String, bool)>>>,
        fail: Arc<StdMutex<bool>>,
    }

    impl SharedInjector {
        fn posted(&self) -> Vec<(String, bool)> {
            self.events.lock().unwrap().clone()
        }

        fn fail_next(&self) {
            *self.fail.lock().unwrap() = true;
        }
    }

    impl EventInjector for SharedInjector {
        fn post_unicode(&mut self, ch: char, key_down: bool) -> Result<()> {
            if *self.fail.lock().unwrap() {
                return Err(EngineError::InjectionRejected("simulated".into()));
            }
            self.events.lock().unwrap().push((ch.to_string(), key_down));
            Ok(())
        }

        fn post_key_code(&mut self, key_code: u16, key_down: bool) -> Result<()> {
            if *self.fail.lock().unwrap() {
                return Err(EngineError::InjectionRejected("simulated".into()));
            }
            self.events
                .lock()
                .unwrap()
                .push((format!("#{key_code}"), key_down));
            Ok(())
        }
    }

    /// Minimal cooperative client for engine-level tests.
    #[derive(Default)]
    struct NullClient {
        marked: String,
        committed: String,
    }

    impl TextClient for NullClient {
        fn composed_text(&self) -> String {
            self.marked.clone()
        }

        fn set_marked_text(&mut self, text: &str, _caret: usize) {
            self.marked = text.to_string();
        }

        fn commit_text(&mut self, text: &str) {
            self.committed.push_str(text);
        }
    }

    fn started_engine(
        transformer: impl Transformer + 'static,
        injector: SharedInjector,
    ) -> InterceptionEngine {
        let engine = InterceptionEngine::new(
            Box::new(transformer),
            Box::new(injector),
            Box::new(FlagHook::default()),
            Arc::new(FixedProbe::granted()),
        );
        engine.start().unwrap();
        engine.notify_app_activated("com.example.editor");
        engine
    }

    fn key(ch: char) -> KeyEvent {
        let (code, mods) = crate::layout::key_code_for(ch).unwrap();
        KeyEvent::key_down(code, mods)
    }

    #[test]
    fn test_start_requires_permission() {
        let engine = InterceptionEngine::new(
            Box::new(NullTransformer),
            Box::new(SharedInjector::default()),
            Box::new(FlagHook::default()),
            Arc::new(FixedProbe::denied()),
        );
        assert!(matches!(
            engine.start().unwrap_err(),
            EngineError::PermissionDenied
        ));
        assert!(!engine.is_running());
    }

    #[test]
    fn test_start_surfaces_hook_failure() {
        let engine = InterceptionEngine::new(
            Box::new(NullTransformer),
            Box::new(SharedInjector::default()),
            Box::new(RefusingHook),
            Arc::new(FixedProbe::granted()),
        );
        assert!(matches!(
            engine.start().unwrap_err(),
            EngineError::HookInstallFailed(_)
        ));
    }

    #[test]
    fn test_stop_is_idempotent_and_kills_processing() {
        let injector = SharedInjector::default();
        let engine = started_engine(Scripted::new(vec![("a", "â")]), injector.clone());
        engine.stop();
        engine.stop();
        assert!(!engine.is_running());

        let result = engine.on_key_event(&key('a'), EventSource::GlobalHook);
        assert_eq!(result, KeyResult::NotHandled);
        assert!(injector.posted().is_empty());
    }

    #[test]
    fn test_identity_transform_appends_literal() {
        let injector = SharedInjector::default();
        let engine = started_engine(NullTransformer, injector.clone());

        let result = engine.on_key_event(&key('v'), EventSource::GlobalHook);
        assert_eq!(result, KeyResult::NotHandled);
        assert_eq!(engine.composition_text(), "v");
        assert!(injector.posted().is_empty());
    }

    #[test]
    fn test_telex_double_a_replays_circumflex() {
        let injector = SharedInjector::default();
        let engine = started_engine(Scripted::new(vec![("a", "â")]), injector.clone());

        assert_eq!(
            engine.on_key_event(&key('a'), EventSource::GlobalHook),
            KeyResult::NotHandled
        );
        assert_eq!(engine.composition_text(), "a");

        assert_eq!(
            engine.on_key_event(&key('a'), EventSource::GlobalHook),
            KeyResult::Handled
        );
        assert_eq!(engine.composition_text(), "â");

        let posted = injector.posted();
        assert_eq!(
            posted,
            vec![
                (format!("#{}", keycodes::DELETE), true),
                (format!("#{}", keycodes::DELETE), false),
                ("â".to_string(), true),
                ("â".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_excluded_app_sees_no_side_effects() {
        let injector = SharedInjector::default();
        let engine = started_engine(Scripted::new(vec![("", "x")]), injector.clone());
        engine.exclusions().insert("com.apple.Terminal");
        engine.notify_app_activated("com.apple.Terminal");

        for _ in 0..3 {
            let result = engine.on_key_event(&key('a'), EventSource::GlobalHook);
            assert_eq!(result, KeyResult::NotHandled);
        }
        assert_eq!(engine.composition_text(), "");
        assert!(injector.posted().is_empty());
    }

    #[test]
    fn test_focus_change_starts_fresh_buffer() {
        let engine = started_engine(NullTransformer, SharedInjector::default());
        engine.on_key_event(&key('a'), EventSource::GlobalHook);
        assert_eq!(engine.composition_owner(), "com.example.editor");

        engine.notify_app_activated("com.example.browser");
        assert_eq!(engine.composition_text(), "");

        engine.on_key_event(&key('b'), EventSource::GlobalHook);
        assert_eq!(engine.composition_owner(), "com.example.browser");
        assert_eq!(engine.composition_text(), "b");
    }

    #[test]
    fn test_stale_buffer_discarded_without_notification() {
        // Focus moves but the activation notification never arrives; the
        // owner check still repairs the buffer on the next cooperative event.
        let engine = started_engine(NullTransformer, SharedInjector::default());
        engine.on_key_event(&key('a'), EventSource::GlobalHook);

        let mut client = NullClient::default();
        engine.on_key_event(
            &key('b'),
            EventSource::Cooperative {
                app_id: "com.example.other",
                client: &mut client,
            },
        );
        assert_eq!(engine.composition_owner(), "com.example.other");
        assert_eq!(engine.composition_text(), "b");
    }

    #[test]
    fn test_flags_changed_control_resets() {
        let engine = started_engine(NullTransformer, SharedInjector::default());
        engine.on_key_event(&key('a'), EventSource::GlobalHook);
        assert_eq!(engine.composition_text(), "a");

        let ev = KeyEvent::flags_changed(Modifiers::CONTROL);
        assert_eq!(
            engine.on_key_event(&ev, EventSource::GlobalHook),
            KeyResult::NotHandled
        );
        assert_eq!(engine.composition_text(), "");
    }

    #[test]
    fn test_break_key_resets_and_passes_through() {
        let engine = started_engine(NullTransformer, SharedInjector::default());
        engine.on_key_event(&key('a'), EventSource::GlobalHook);

        let ev = KeyEvent::key_down(keycodes::SPACE, Modifiers::empty());
        assert_eq!(
            engine.on_key_event(&ev, EventSource::GlobalHook),
            KeyResult::NotHandled
        );
        assert_eq!(engine.composition_text(), "");
    }

    #[test]
    fn test_shortcut_chord_resets() {
        let engine = started_engine(NullTransformer, SharedInjector::default());
        engine.on_key_event(&key('a'), EventSource::GlobalHook);

        let ev = KeyEvent::key_down(keycodes::ANSI_C, Modifiers::COMMAND);
        assert_eq!(
            engine.on_key_event(&ev, EventSource::GlobalHook),
            KeyResult::NotHandled
        );
        assert_eq!(engine.composition_text(), "");
    }

    #[test]
    fn test_backspace_identity_pops_buffer() {
        let engine = started_engine(NullTransformer, SharedInjector::default());
        engine.on_key_event(&key('a'), EventSource::GlobalHook);
        engine.on_key_event(&key('b'), EventSource::GlobalHook);

        let ev = KeyEvent::key_down(keycodes::DELETE, Modifiers::empty());
        assert_eq!(
            engine.on_key_event(&ev, EventSource::GlobalHook),
            KeyResult::NotHandled
        );
        assert_eq!(engine.composition_text(), "a");
    }

    #[test]
    fn test_replay_failure_resets_composition() {
        let injector = SharedInjector::default();
        let engine = started_engine(Scripted::new(vec![("a", "â")]), injector.clone());
        engine.on_key_event(&key('a'), EventSource::GlobalHook);

        injector.fail_next();
        let result = engine.on_key_event(&key('a'), EventSource::GlobalHook);
        // Nothing was posted, so the raw keystroke is allowed through.
        assert_eq!(result, KeyResult::NotHandled);
        assert_eq!(engine.composition_text(), "");
    }

    #[test]
    fn test_explicit_clear_empties_buffer() {
        let injector = SharedInjector::default();
        let engine = started_engine(Scripted::new(vec![("aa", "")]), injector.clone());
        engine.on_key_event(&key('a'), EventSource::GlobalHook);
        engine.on_key_event(&key('a'), EventSource::GlobalHook);
        assert_eq!(engine.composition_text(), "aa");

        assert_eq!(
            engine.on_key_event(&key('x'), EventSource::GlobalHook),
            KeyResult::Handled
        );
        assert_eq!(engine.composition_text(), "");
        // two backspace pairs, no insertions
        assert_eq!(injector.posted().len(), 4);
    }

    #[test]
    fn test_cooperative_source_replaces_marked_text() {
        let engine = started_engine(Scripted::new(vec![("a", "â")]), SharedInjector::default());
        let mut client = NullClient::default();

        engine.on_key_event(
            &key('a'),
            EventSource::Cooperative {
                app_id: "com.example.notes",
                client: &mut client,
            },
        );
        let result = engine.on_key_event(
            &key('a'),
            EventSource::Cooperative {
                app_id: "com.example.notes",
                client: &mut client,
            },
        );
        assert_eq!(result, KeyResult::Handled);
        assert_eq!(client.marked, "â");
        assert_eq!(engine.composition_text(), "â");
    }

    #[test]
    fn test_set_input_method_resets_buffer() {
        let engine = started_engine(NullTransformer, SharedInjector::default());
        engine.on_key_event(&key('a'), EventSource::GlobalHook);
        engine.set_input_method(InputMethod::Vni);
        assert_eq!(engine.composition_text(), "");
        assert_eq!(engine.settings().input_method, InputMethod::Vni);
    }

    #[test]
    fn test_disabled_engine_passes_everything() {
        let injector = SharedInjector::default();
        let engine = started_engine(Scripted::new(vec![("", "x")]), injector.clone());
        engine.set_enabled(false);

        let result = engine.on_key_event(&key('a'), EventSource::GlobalHook);
        assert_eq!(result, KeyResult::NotHandled);
        assert_eq!(engine.composition_text(), "");
        assert!(injector.posted().is_empty());
    }

    #[test]
    fn test_digit_passes_through_without_append() {
        let engine = started_engine(NullTransformer, SharedInjector::default());
        let result = engine.on_key_event(&key('1'), EventSource::GlobalHook);
        assert_eq!(result, KeyResult::NotHandled);
        assert_eq!(engine.composition_text(), "");
    }
}
