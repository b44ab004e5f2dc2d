//! Key binding strings such as `"ctrl+alt+3"`.

use crate::error::ManifestError;
use std::fmt;
use std::str::FromStr;

/// Modifier keys as a bitfield
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    /// No modifier held.
    pub const NONE: Modifiers = Modifiers(0);
    /// Control.
    pub const CTRL: Modifiers = Modifiers(0b0001);
    /// Shift.
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    /// Alt / Option.
    pub const ALT: Modifiers = Modifiers(0b0100);
    /// Cmd on macOS, Win elsewhere.
    pub const META: Modifiers = Modifiers(0b1000);

    /// The platform "command" modifier (Cmd on macOS, Ctrl elsewhere)
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }

    /// Check if this contains all modifiers in other
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

/// A key plus the modifiers held with it.
///
/// `key` is lower-cased: either a single character or a named key (`"enter"`, `"f5"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    /// Held modifiers.
    pub mods: Modifiers,
    /// Pressed key.
    pub key: String,
}

const NAMED_KEYS: &[&str] = &[
    "enter", "escape", "tab", "backspace", "delete", "space", "up", "down", "left", "right",
    "home", "end", "pageup", "pagedown", "insert",
];

fn normalize_key(part: &str) -> Option<String> {
    let mut chars = part.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(c.to_lowercase().collect());
    }

    let lower = part.to_ascii_lowercase();
    let is_function_key = lower
        .strip_prefix('f')
        .and_then(|n| n.parse::<u8>().ok())
        .is_some_and(|n| (1..=24).contains(&n));

    (is_function_key || NAMED_KEYS.contains(&lower.as_str())).then_some(lower)
}

impl FromStr for Keystroke {
    type Err = ManifestError;

    /// Parse `"mod+mod+key"`. Exactly one non-modifier part is allowed.
    fn from_str(key_str: &str) -> Result<Self, Self::Err> {
        let invalid = || ManifestError::InvalidKey(key_str.to_string());

        let mut mods = Modifiers::NONE;
        let mut key = None;

        for part in key_str.split('+') {
            let part = part.trim();
            match part.to_ascii_lowercase().as_str() {
                "cmd" => mods = mods | Modifiers::cmd(),
                "ctrl" | "control" => mods = mods | Modifiers::CTRL,
                "shift" => mods = mods | Modifiers::SHIFT,
                "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
                "meta" | "super" | "win" => mods = mods | Modifiers::META,
                _ => {
                    if key.is_some() {
                        return Err(invalid());
                    }
                    key = Some(normalize_key(part).ok_or_else(invalid)?);
                }
            }
        }

        let key = key.ok_or_else(invalid)?;
        Ok(Keystroke { mods, key })
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, name) in [
            (Modifiers::CTRL, "ctrl"),
            (Modifiers::SHIFT, "shift"),
            (Modifiers::ALT, "alt"),
            (Modifiers::META, "meta"),
        ] {
            if self.mods.contains(flag) {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}
