//! Hotkey chord parsing.
//!
//! Bindings are stored as human-readable strings (`"Ctrl+Shift+O"`) in user
//! settings. This module turns them into a canonical [`Hotkey`] that the
//! platform layer can register; registration itself happens elsewhere.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HotkeyError {
    #[error("empty hotkey binding")]
    Empty,
    #[error("hotkey '{0}' has no key, only modifiers")]
    MissingKey(String),
    #[error("hotkey '{0}' names more than one key")]
    MultipleKeys(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("modifier '{0}' repeated")]
    DuplicateModifier(String),
    #[error("hotkey '{0}' needs at least one modifier")]
    NoModifier(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub win: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.win)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Function(u8),
    Named(&'static str),
}

const NAMED_KEYS: &[&str] = &[
    "Space", "Tab", "Escape", "Enter", "Backspace", "Home", "End", "Insert", "Delete", "PageUp",
    "PageDown", "Up", "Down", "Left", "Right", "PrintScreen", "Pause",
];

impl Key {
    fn parse(token: &str) -> Option<Key> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphanumeric() {
                return Some(Key::Char(c.to_ascii_uppercase()));
            }
            return None;
        }
        let upper = token.to_ascii_uppercase();
        if let Some(num) = upper.strip_prefix('F') {
            if let Ok(n) = num.parse::<u8>() {
                return (1..=24).contains(&n).then_some(Key::Function(n));
            }
        }
        let alias = match upper.as_str() {
            "ESC" => Some("Escape"),
            "RETURN" => Some("Enter"),
            "DEL" => Some("Delete"),
            "INS" => Some("Insert"),
            "PGUP" => Some("PageUp"),
            "PGDN" => Some("PageDown"),
            _ => None,
        };
        alias.or_else(|| {
            NAMED_KEYS
                .iter()
                .copied()
                .find(|name| name.eq_ignore_ascii_case(token))
        })
        .map(Key::Named)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Function(n) => write!(f, "F{}", n),
            Key::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl FromStr for Hotkey {
    type Err = HotkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let binding = s.trim();
        if binding.is_empty() {
            return Err(HotkeyError::Empty);
        }
        let mut modifiers = Modifiers::default();
        let mut key = None;
        for token in binding.split('+').map(str::trim) {
            let slot = match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => Some(&mut modifiers.ctrl),
                "alt" => Some(&mut modifiers.alt),
                "shift" => Some(&mut modifiers.shift),
                "win" | "super" | "meta" => Some(&mut modifiers.win),
                _ => None,
            };
            if let Some(flag) = slot {
                if *flag {
                    return Err(HotkeyError::DuplicateModifier(token.to_string()));
                }
                *flag = true;
                continue;
            }
            if token.is_empty() {
                return Err(HotkeyError::MissingKey(binding.to_string()));
            }
            if key.is_some() {
                return Err(HotkeyError::MultipleKeys(binding.to_string()));
            }
            key = Some(Key::parse(token).ok_or_else(|| HotkeyError::UnknownKey(token.to_string()))?);
        }
        let key = key.ok_or_else(|| HotkeyError::MissingKey(binding.to_string()))?;
        if modifiers.is_empty() && !matches!(key, Key::Function(_)) {
            return Err(HotkeyError::NoModifier(binding.to_string()));
        }
        Ok(Hotkey { modifiers, key })
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.modifiers;
        for (on, name) in [(m.ctrl, "Ctrl"), (m.alt, "Alt"), (m.shift, "Shift"), (m.win, "Win")] {
            if on {
                write!(f, "{}+", name)?;
            }
        }
        write!(f, "{}", self.key)
    }
}
