//! Host-agnostic keyboard events.
//!
//! The host page maps its native key handling to these variants. The
//! session never sees raw platform input, so the whole engine can be
//! driven (and tested) without a browser or windowing system.

use serde::{Deserialize, Serialize};

/// A key event delivered to the terminal while it has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    /// A printable character typed into the input buffer.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Submit the current input buffer.
    Enter,
    /// Recall the previous (older) history entry.
    ArrowUp,
    /// Recall the next (newer) history entry.
    ArrowDown,
    /// Attempt autocompletion of the current buffer.
    Tab,
    /// Collapse the terminal; session state is kept.
    Escape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_event_ascii() {
        let e = KeyEvent::Char('c');
        assert_eq!(e, KeyEvent::Char('c'));
    }

    #[test]
    fn char_event_unicode() {
        let e = KeyEvent::Char('\u{00e9}');
        if let KeyEvent::Char(ch) = e {
            assert_eq!(ch, '\u{00e9}');
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn all_variants_distinct() {
        let events = [
            KeyEvent::Char('x'),
            KeyEvent::Backspace,
            KeyEvent::Enter,
            KeyEvent::ArrowUp,
            KeyEvent::ArrowDown,
            KeyEvent::Tab,
            KeyEvent::Escape,
        ];
        for (i, a) in events.iter().enumerate() {
            for (j, b) in events.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "variants {i} and {j} should differ");
                }
            }
        }
    }

    #[test]
    fn key_event_clone_and_copy() {
        let e = KeyEvent::Tab;
        let e2 = e;
        assert_eq!(e, e2);
    }

    #[test]
    fn key_event_serde_roundtrip() {
        let e = KeyEvent::Char('$');
        let json = serde_json::to_string(&e).unwrap();
        let e2: KeyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(e, e2);
    }

    #[test]
    fn key_event_debug_format() {
        assert_eq!(format!("{:?}", KeyEvent::Enter), "Enter");
    }
}
