//! Scripted stand-in for the external diacritic engine.
//!
//! The real transformer is an opaque external service; this one exists so
//! the demo binary and the tests have something concrete to talk to. It
//! knows just enough Telex and VNI to be recognizable (vowel doubling, a few
//! digit marks, backspace shortening) and nothing more — it is not a
//! Vietnamese input method.

use vietkey_core::{
    keycodes, InputMethod, KeyboardLayout, Language, Modifiers, Transformer, UsQwertyLayout,
};

/// Demo transformer with a handful of hard-coded rewrite rules.
pub struct DemoTransformer {
    method: InputMethod,
    language: Language,
    layout: UsQwertyLayout,
}

impl DemoTransformer {
    pub fn new() -> Self {
        Self {
            method: InputMethod::Telex,
            language: Language::Vn,
            layout: UsQwertyLayout::new(),
        }
    }

    fn telex_rewrite(last: char, key: char) -> Option<char> {
        match (last, key) {
            ('a', 'a') => Some('â'),
            ('e', 'e') => Some('ê'),
            ('o', 'o') => Some('ô'),
            ('d', 'd') => Some('đ'),
            ('a', 'w') => Some('ă'),
            ('o', 'w') => Some('ơ'),
            ('u', 'w') => Some('ư'),
            _ => None,
        }
    }

    fn vni_rewrite(last: char, key: char) -> Option<char> {
        match (last, key) {
            ('a', '6') => Some('â'),
            ('e', '6') => Some('ê'),
            ('o', '6') => Some('ô'),
            ('o', '7') => Some('ơ'),
            ('u', '7') => Some('ư'),
            ('a', '8') => Some('ă'),
            ('d', '9') => Some('đ'),
            _ => None,
        }
    }
}

impl Default for DemoTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer for DemoTransformer {
    fn reset(&mut self) {
        // Pure over the buffer text handed in; nothing to clear.
    }

    fn process(&mut self, key_code: u16, modifiers: Modifiers, current_text: &str) -> String {
        if self.language == Language::En {
            return current_text.to_string();
        }

        if key_code == keycodes::DELETE {
            let mut shortened: Vec<char> = current_text.chars().collect();
            shortened.pop();
            return shortened.into_iter().collect();
        }

        let key = match self.layout.translate(key_code, modifiers) {
            Ok(Some(ch)) => ch.to_ascii_lowercase(),
            _ => return current_text.to_string(),
        };
        let last = match current_text.chars().last() {
            Some(ch) => ch,
            None => return current_text.to_string(),
        };

        let rewrite = match self.method {
            InputMethod::Telex => Self::telex_rewrite(last, key),
            InputMethod::Vni => Self::vni_rewrite(last, key),
        };

        match rewrite {
            Some(replacement) => {
                let mut scalars: Vec<char> = current_text.chars().collect();
                scalars.pop();
                scalars.push(replacement);
                scalars.into_iter().collect()
            }
            None => current_text.to_string(),
        }
    }

    fn set_method(&mut self, method: InputMethod) {
        self.method = method;
    }

    fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}
