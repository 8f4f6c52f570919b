//! Key event values and virtual key codes.
//!
//! A `KeyEvent` is produced once per physical event by the OS-facing adapter
//! and never mutated afterwards. Key codes follow the macOS ANSI virtual
//! key-code table, which is what both event sources (the global event tap and
//! cooperative text-input clients) report.

use bitflags::bitflags;

bitflags! {
    /// Modifier state carried by a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const OPTION = 1 << 2;
        const COMMAND = 1 << 3;
        const CAPS_LOCK = 1 << 4;
    }
}

impl Modifiers {
    /// Modifiers that mark a keystroke as an OS/app shortcut rather than
    /// composable text input.
    pub fn is_shortcut(self) -> bool {
        self.intersects(Modifiers::CONTROL | Modifiers::OPTION | Modifiers::COMMAND)
    }
}

/// What kind of physical event this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    KeyDown,
    KeyUp,
    /// A modifier key changed state; `key_code` is not meaningful.
    FlagsChanged,
}

/// Immutable snapshot of one keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: u16,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A key-down event for `key_code` with the given modifier state.
    pub fn key_down(key_code: u16, modifiers: Modifiers) -> Self {
        Self {
            key_code,
            modifiers,
            kind: KeyEventKind::KeyDown,
        }
    }

    /// A key-up event.
    pub fn key_up(key_code: u16, modifiers: Modifiers) -> Self {
        Self {
            key_code,
            modifiers,
            kind: KeyEventKind::KeyUp,
        }
    }

    /// A modifier-change event.
    pub fn flags_changed(modifiers: Modifiers) -> Self {
        Self {
            key_code: 0,
            modifiers,
            kind: KeyEventKind::FlagsChanged,
        }
    }
}

/// macOS ANSI virtual key codes used by the engine and the US layout table.
pub mod keycodes {
    pub const ANSI_A: u16 = 0x00;
    pub const ANSI_S: u16 = 0x01;
    pub const ANSI_D: u16 = 0x02;
    pub const ANSI_F: u16 = 0x03;
    pub const ANSI_H: u16 = 0x04;
    pub const ANSI_G: u16 = 0x05;
    pub const ANSI_Z: u16 = 0x06;
    pub const ANSI_X: u16 = 0x07;
    pub const ANSI_C: u16 = 0x08;
    pub const ANSI_V: u16 = 0x09;
    pub const ANSI_B: u16 = 0x0B;
    pub const ANSI_Q: u16 = 0x0C;
    pub const ANSI_W: u16 = 0x0D;
    pub const ANSI_E: u16 = 0x0E;
    pub const ANSI_R: u16 = 0x0F;
    pub const ANSI_Y: u16 = 0x10;
    pub const ANSI_T: u16 = 0x11;
    pub const ANSI_1: u16 = 0x12;
    pub const ANSI_2: u16 = 0x13;
    pub const ANSI_3: u16 = 0x14;
    pub const ANSI_4: u16 = 0x15;
    pub const ANSI_6: u16 = 0x16;
    pub const ANSI_5: u16 = 0x17;
    pub const ANSI_9: u16 = 0x19;
    pub const ANSI_7: u16 = 0x1A;
    pub const ANSI_8: u16 = 0x1C;
    pub const ANSI_0: u16 = 0x1D;
    pub const ANSI_O: u16 = 0x1F;
    pub const ANSI_U: u16 = 0x20;
    pub const ANSI_I: u16 = 0x22;
    pub const ANSI_P: u16 = 0x23;
    pub const RETURN: u16 = 0x24;
    pub const ANSI_L: u16 = 0x25;
    pub const ANSI_J: u16 = 0x26;
    pub const ANSI_K: u16 = 0x28;
    pub const ANSI_N: u16 = 0x2D;
    pub const ANSI_M: u16 = 0x2E;
    pub const TAB: u16 = 0x30;
    pub const SPACE: u16 = 0x31;
    /// Backspace.
    pub const DELETE: u16 = 0x33;
    pub const ESCAPE: u16 = 0x35;
    pub const FORWARD_DELETE: u16 = 0x75;
    pub const LEFT_ARROW: u16 = 0x7B;
    pub const RIGHT_ARROW: u16 = 0x7C;
    pub const DOWN_ARROW: u16 = 0x7D;
    pub const UP_ARROW: u16 = 0x7E;

    /// Control and navigation keys that end the current composition episode.
    /// They bypass the transformer: the engine resets its buffer and lets the
    /// event flow through. Backspace is intentionally absent, the transformer
    /// gets to see it.
    pub fn is_break_key(key_code: u16) -> bool {
        matches!(
            key_code,
            RETURN
                | TAB
                | SPACE
                | ESCAPE
                | FORWARD_DELETE
                | LEFT_ARROW
                | RIGHT_ARROW
                | DOWN_ARROW
                | UP_ARROW
        )
    }
}
