//! Key codes and key events delivered by the host.
//!
//! Hosts report keys as integer codes: printable keys carry their character value, control keys
//! use the small fixed codes below. Anything else is passed through as [`Key::Other`].

pub const KEY_BACKSPACE: i32 = 8;
pub const KEY_TAB: i32 = 9;
pub const KEY_RETURN: i32 = 13;
pub const KEY_ESCAPE: i32 = 27;
pub const KEY_DELETE: i32 = 127;

const PRINTABLE_FIRST: i32 = 0x20;
const PRINTABLE_LAST: i32 = 0xff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    Press,
    Repeat,
    Release,
}

impl KeyEventType {
    /// Press and auto-repeat both count as key-down.
    pub fn is_down(self) -> bool {
        matches!(self, KeyEventType::Press | KeyEventType::Repeat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: i32,
    pub event_type: KeyEventType,
}

impl KeyEvent {
    pub fn press(code: i32) -> Self {
        Self {
            code,
            event_type: KeyEventType::Press,
        }
    }

    pub fn repeat(code: i32) -> Self {
        Self {
            code,
            event_type: KeyEventType::Repeat,
        }
    }

    pub fn release(code: i32) -> Self {
        Self {
            code,
            event_type: KeyEventType::Release,
        }
    }

    pub fn key(&self) -> Key {
        Key::from_code(self.code)
    }
}

/// Classified key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Return,
    Backspace,
    Delete,
    Tab,
    Char(char),
    Other(i32),
}

impl Key {
    /// Control keys win over the printable range: `KEY_DELETE` sits inside it.
    pub fn from_code(code: i32) -> Self {
        match code {
            KEY_RETURN => Key::Return,
            KEY_BACKSPACE => Key::Backspace,
            KEY_DELETE => Key::Delete,
            KEY_TAB => Key::Tab,
            PRINTABLE_FIRST..=PRINTABLE_LAST => u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .map_or(Key::Other(code), Key::Char),
            _ => Key::Other(code),
        }
    }
}

pub fn is_printable(code: i32) -> bool {
    matches!(Key::from_code(code), Key::Char(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_keys_are_classified_first() {
        assert_eq!(Key::from_code(KEY_RETURN), Key::Return);
        assert_eq!(Key::from_code(KEY_BACKSPACE), Key::Backspace);
        assert_eq!(Key::from_code(KEY_TAB), Key::Tab);
        assert_eq!(Key::from_code(KEY_DELETE), Key::Delete);
        assert!(!is_printable(KEY_DELETE));
    }

    #[test]
    fn printable_range_is_inclusive() {
        assert_eq!(Key::from_code(0x20), Key::Char(' '));
        assert_eq!(Key::from_code('l' as i32), Key::Char('l'));
        assert_eq!(Key::from_code(0xff), Key::Char('\u{ff}'));
        assert_eq!(Key::from_code(0xe9), Key::Char('\u{e9}'));
    }

    #[test]
    fn out_of_range_codes_are_other() {
        assert_eq!(Key::from_code(0x1f), Key::Other(0x1f));
        assert_eq!(Key::from_code(0x100), Key::Other(0x100));
        assert_eq!(Key::from_code(KEY_ESCAPE), Key::Other(KEY_ESCAPE));
        assert_eq!(Key::from_code(-1), Key::Other(-1));
    }

    #[test]
    fn repeat_counts_as_key_down() {
        assert!(KeyEvent::press(1).event_type.is_down());
        assert!(KeyEvent::repeat(1).event_type.is_down());
        assert!(!KeyEvent::release(1).event_type.is_down());
    }
}
