//! Key model: the set of logical buttons a keyboard layout is built from.
//!
//! A `Key` is pure data. Everything the renderer or session needs to know
//! about a key (does it produce text, is it a shift key, what label does it
//! carry) is derived from the variant, never stored alongside it.

use serde::{Deserialize, Serialize};

/// Literal inserted by the domain-suffix key. Exempt from case
/// transformation and from the caps auto-clear rule.
pub const DOMAIN_SUFFIX: &str = ".com";

/// One logical keyboard button.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Inserts its literal text. May carry a multi-character token such as
    /// the domain suffix.
    Letter(String),
    Backspace,
    /// One of the shift pair; `left` distinguishes the two sides.
    Shift { left: bool },
    Done,
    /// Layout spacer. Inert: not pressable, not focusable.
    Blank,
    Dismiss,
}

impl Key {
    pub fn letter(text: impl Into<String>) -> Self {
        Key::Letter(text.into())
    }

    /// Renderer label for keys without an icon.
    pub fn title(&self) -> &str {
        match self {
            Key::Letter(text) => text,
            Key::Backspace => "delete",
            Key::Shift { .. } => "shift",
            Key::Done => "done",
            Key::Blank => "",
            Key::Dismiss => "dismiss",
        }
    }

    pub fn is_shift(&self) -> bool {
        matches!(self, Key::Shift { .. })
    }

    pub fn produces_text(&self) -> bool {
        matches!(self, Key::Letter(_))
    }

    /// Literal text this key inserts, if any.
    pub fn text_value(&self) -> Option<&str> {
        match self {
            Key::Letter(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_domain_suffix(&self) -> bool {
        self.text_value() == Some(DOMAIN_SUFFIX)
    }
}

// Lets layout tables read as rows of string literals.
impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::Letter(text.to_string())
    }
}
