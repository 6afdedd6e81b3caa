//! Layout tables: input-type classification → key grid.
//!
//! Resolution is a pure function of the classification (and the device
//! idiom, which only affects the aspect hint). It never depends on session
//! state. Unrecognized classifications fail loudly: silently guessing a
//! layout is a correctness hazard.

use serde::{Deserialize, Serialize};

use crate::key::Key;

/// Input-type classification reported by the host target.
///
/// `Other` carries classifications this crate does not know about yet;
/// hosts evolve independently and may report new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputTypeClass {
    Text,
    AsciiCapable,
    NumbersAndPunctuation,
    Url,
    Email,
    Twitter,
    WebSearch,
    NumberPad,
    PhonePad,
    NamePhonePad,
    DecimalPad,
    AsciiCapableNumberPad,
    Other(u16),
}

/// Device class, consumed only as a sizing-hint input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceIdiom {
    Phone,
    Tablet,
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("unhandled input-type classification: {0:?}")]
    UnhandledClassification(InputTypeClass),
}

/// One display row, left to right. Row order is semantically meaningful:
/// the shift pair sits at both ends of its row, and the leftmost/rightmost
/// keys anchor the renderer's width-matching rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRow {
    pub keys: Vec<Key>,
}

impl LayoutRow {
    fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }
}

/// Resolved key grid plus the aspect hint passed through to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    pub rows: Vec<LayoutRow>,
    /// Width:height hint for key faces; values above 1.0 widen keys.
    pub key_aspect: f32,
}

impl KeyboardLayout {
    /// Resolve the layout for a classification.
    ///
    /// Text-like classes get the full QWERTY-style layout; numeric-like
    /// classes get the compact pad. Anything else is an error.
    pub fn resolve(class: InputTypeClass, idiom: DeviceIdiom) -> Result<Self, LayoutError> {
        use InputTypeClass::*;
        match class {
            Text | AsciiCapable | NumbersAndPunctuation | Url | Email | Twitter | WebSearch => {
                Ok(Self::full())
            }
            NumberPad | PhonePad | NamePhonePad | DecimalPad | AsciiCapableNumberPad => {
                Ok(Self::numeric(idiom))
            }
            Other(_) => Err(LayoutError::UnhandledClassification(class)),
        }
    }

    /// Full alphanumeric layout: 5 rows, shift pair, domain-suffix key.
    fn full() -> Self {
        let rows = vec![
            row(&["`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0"], Some(Key::Backspace)),
            blank_wrapped(&["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"]),
            {
                let mut keys: Vec<Key> = vec![Key::Blank];
                keys.extend(letters(&["a", "s", "d", "f", "g", "h", "j", "k", "l"]));
                keys.push(Key::Done);
                LayoutRow::new(keys)
            },
            {
                let mut keys: Vec<Key> = vec![Key::Shift { left: true }];
                keys.extend(letters(&["z", "x", "c", "v", "b", "n", "m"]));
                keys.push(Key::Shift { left: false });
                LayoutRow::new(keys)
            },
            row(&[" ", ".", "@", ".com"], Some(Key::Dismiss)),
        ];
        Self { rows, key_aspect: 1.0 }
    }

    /// Compact numeric layout: 4 rows, no shift keys.
    fn numeric(idiom: DeviceIdiom) -> Self {
        let rows = vec![
            blank_wrapped(&["1", "2", "3"]),
            blank_wrapped(&["4", "5", "6"]),
            blank_wrapped(&["7", "8", "9"]),
            LayoutRow::new(vec![
                Key::Blank,
                Key::Done,
                Key::letter("0"),
                Key::Backspace,
                Key::Blank,
            ]),
        ];
        // Wider keys on anything that isn't a phone.
        let key_aspect = match idiom {
            DeviceIdiom::Phone => 1.0,
            DeviceIdiom::Tablet => 1.33,
        };
        Self { rows, key_aspect }
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().flat_map(|row| row.keys.iter())
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.keys().any(|k| k == key)
    }

    pub fn shift_key_count(&self) -> usize {
        self.keys().filter(|k| k.is_shift()).count()
    }
}

fn letters(texts: &[&str]) -> Vec<Key> {
    texts.iter().map(|&t| Key::from(t)).collect()
}

fn row(texts: &[&str], trailing: Option<Key>) -> LayoutRow {
    let mut keys = letters(texts);
    keys.extend(trailing);
    LayoutRow::new(keys)
}

fn blank_wrapped(texts: &[&str]) -> LayoutRow {
    let mut keys = vec![Key::Blank];
    keys.extend(letters(texts));
    keys.push(Key::Blank);
    LayoutRow::new(keys)
}
