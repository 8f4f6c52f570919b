//! Best-effort literal character extraction.
//!
//! The engine needs a layout-aware guess at the literal character a key
//! event would produce, both to append plain letters to the composition and
//! to hand transformers something recognizable. On the real OS this goes
//! through the layout services and is not free, so implementations sit
//! behind a small LRU cache. Only letters are literal-appendable; everything
//! else is reported but left to pass through.

use std::num::NonZeroUsize;

use ahash::AHashMap;
use lru::LruCache;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::error::EngineError;
use crate::key_event::{keycodes, Modifiers};

/// Layout-aware translation from a key event to a literal character.
///
/// `Ok(None)` means the key is understood but produces no appendable
/// character under the given modifiers. `Err` means the layout could not map
/// the key at all; the engine degrades that keystroke to pass-through.
pub trait KeyboardLayout: Send {
    fn translate(&self, key_code: u16, modifiers: Modifiers) -> Result<Option<char>, EngineError>;
}

/// (unshifted, shifted) characters for the ANSI US layout.
static US_QWERTY: phf::Map<u16, (char, char)> = phf::phf_map! {
    0x00u16 => ('a', 'A'),
    0x01u16 => ('s', 'S'),
    0x02u16 => ('d', 'D'),
    0x03u16 => ('f', 'F'),
    0x04u16 => ('h', 'H'),
    0x05u16 => ('g', 'G'),
    0x06u16 => ('z', 'Z'),
    0x07u16 => ('x', 'X'),
    0x08u16 => ('c', 'C'),
    0x09u16 => ('v', 'V'),
    0x0Bu16 => ('b', 'B'),
    0x0Cu16 => ('q', 'Q'),
    0x0Du16 => ('w', 'W'),
    0x0Eu16 => ('e', 'E'),
    0x0Fu16 => ('r', 'R'),
    0x10u16 => ('y', 'Y'),
    0x11u16 => ('t', 'T'),
    0x12u16 => ('1', '!'),
    0x13u16 => ('2', '@'),
    0x14u16 => ('3', '#'),
    0x15u16 => ('4', '$'),
    0x16u16 => ('6', '^'),
    0x17u16 => ('5', '%'),
    0x19u16 => ('9', '('),
    0x1Au16 => ('7', '&'),
    0x1Cu16 => ('8', '*'),
    0x1Du16 => ('0', ')'),
    0x1Fu16 => ('o', 'O'),
    0x20u16 => ('u', 'U'),
    0x22u16 => ('i', 'I'),
    0x23u16 => ('p', 'P'),
    0x25u16 => ('l', 'L'),
    0x26u16 => ('j', 'J'),
    0x28u16 => ('k', 'K'),
    0x2Du16 => ('n', 'N'),
    0x2Eu16 => ('m', 'M'),
};

/// Reverse map from a character to the key event producing it, built lazily
/// from the forward table. Used by adapters and the demo harness to script
/// keystrokes.
static CHAR_TO_KEY: Lazy<AHashMap<char, (u16, Modifiers)>> = Lazy::new(|| {
    let mut map = AHashMap::new();
    for (&code, &(lower, upper)) in US_QWERTY.entries() {
        map.insert(lower, (code, Modifiers::empty()));
        map.insert(upper, (code, Modifiers::SHIFT));
    }
    map.insert(' ', (keycodes::SPACE, Modifiers::empty()));
    map
});

/// The key code and modifiers that produce `ch` on the US layout.
pub fn key_code_for(ch: char) -> Option<(u16, Modifiers)> {
    CHAR_TO_KEY.get(&ch).copied()
}

/// ANSI US layout with a translation cache in front.
pub struct UsQwertyLayout {
    cache: Mutex<LruCache<(u16, u8), Option<char>>>,
}

impl UsQwertyLayout {
    const CACHE_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self {
            cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(Self::CACHE_CAPACITY).expect("cache capacity is non-zero"),
            )),
        }
    }

    fn lookup(key_code: u16, modifiers: Modifiers) -> Result<Option<char>, EngineError> {
        let &(lower, upper) = US_QWERTY
            .get(&key_code)
            .ok_or(EngineError::LayoutTranslationFailed(key_code))?;

        // Caps lock uppercases letters but leaves the digit row alone;
        // shift+caps on a letter cancels out the same way the OS does it.
        let shifted = if lower.is_ascii_alphabetic() {
            modifiers.contains(Modifiers::SHIFT) != modifiers.contains(Modifiers::CAPS_LOCK)
        } else {
            modifiers.contains(Modifiers::SHIFT)
        };
        Ok(Some(if shifted { upper } else { lower }))
    }
}

impl Default for UsQwertyLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardLayout for UsQwertyLayout {
    fn translate(&self, key_code: u16, modifiers: Modifiers) -> Result<Option<char>, EngineError> {
        let relevant = modifiers & (Modifiers::SHIFT | Modifiers::CAPS_LOCK);
        let key = (key_code, relevant.bits());
        if let Some(cached) = self.cache.lock().get(&key) {
            return Ok(*cached);
        }
        let translated = Self::lookup(key_code, relevant)?;
        self.cache.lock().put(key, translated);
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_letter() {
        let layout = UsQwertyLayout::new();
        assert_eq!(
            layout.translate(keycodes::ANSI_A, Modifiers::empty()).unwrap(),
            Some('a')
        );
    }

    #[test]
    fn test_shift_and_caps() {
        let layout = UsQwertyLayout::new();
        assert_eq!(
            layout.translate(keycodes::ANSI_A, Modifiers::SHIFT).unwrap(),
            Some('A')
        );
        assert_eq!(
            layout
                .translate(keycodes::ANSI_A, Modifiers::CAPS_LOCK)
                .unwrap(),
            Some('A')
        );
        assert_eq!(
            layout
                .translate(keycodes::ANSI_A, Modifiers::SHIFT | Modifiers::CAPS_LOCK)
                .unwrap(),
            Some('a')
        );
    }

    #[test]
    fn test_digit_row() {
        let layout = UsQwertyLayout::new();
        assert_eq!(
            layout.translate(keycodes::ANSI_1, Modifiers::empty()).unwrap(),
            Some('1')
        );
        assert_eq!(
            layout.translate(keycodes::ANSI_1, Modifiers::SHIFT).unwrap(),
            Some('!')
        );
        // caps lock alone does not shift digits
        assert_eq!(
            layout
                .translate(keycodes::ANSI_1, Modifiers::CAPS_LOCK)
                .unwrap(),
            Some('1')
        );
    }

    #[test]
    fn test_unknown_key_code_fails() {
        let layout = UsQwertyLayout::new();
        let err = layout.translate(0x7F, Modifiers::empty()).unwrap_err();
        assert!(matches!(err, EngineError::LayoutTranslationFailed(0x7F)));
    }

    #[test]
    fn test_cached_translation_is_stable() {
        let layout = UsQwertyLayout::new();
        for _ in 0..3 {
            assert_eq!(
                layout.translate(keycodes::ANSI_V, Modifiers::empty()).unwrap(),
                Some('v')
            );
        }
    }

    #[test]
    fn test_reverse_lookup_round_trips() {
        let layout = UsQwertyLayout::new();
        for ch in ['a', 'Z', '7', ' '] {
            let (code, mods) = key_code_for(ch).unwrap();
            if ch == ' ' {
                continue; // space is a break key, not in the literal table
            }
            assert_eq!(layout.translate(code, mods).unwrap(), Some(ch));
        }
        assert_eq!(key_code_for('ậ'), None);
    }
}
