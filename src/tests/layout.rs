use crate::key::Key;
use crate::layout::{DeviceIdiom, InputTypeClass, KeyboardLayout, LayoutError};

const TEXT_LIKE: [InputTypeClass; 7] = [
    InputTypeClass::Text,
    InputTypeClass::AsciiCapable,
    InputTypeClass::NumbersAndPunctuation,
    InputTypeClass::Url,
    InputTypeClass::Email,
    InputTypeClass::Twitter,
    InputTypeClass::WebSearch,
];

const NUMERIC_LIKE: [InputTypeClass; 5] = [
    InputTypeClass::NumberPad,
    InputTypeClass::PhonePad,
    InputTypeClass::NamePhonePad,
    InputTypeClass::DecimalPad,
    InputTypeClass::AsciiCapableNumberPad,
];

#[test]
fn text_like_classes_get_full_layout() {
    for class in TEXT_LIKE {
        let layout = KeyboardLayout::resolve(class, DeviceIdiom::Phone).unwrap();
        assert_eq!(layout.rows.len(), 5, "{class:?}");
        assert_eq!(layout.shift_key_count(), 2, "{class:?}");
        let suffixes = layout.keys().filter(|k| k.is_domain_suffix()).count();
        assert_eq!(suffixes, 1, "{class:?}");
    }
}

#[test]
fn numeric_like_classes_get_compact_layout() {
    for class in NUMERIC_LIKE {
        let layout = KeyboardLayout::resolve(class, DeviceIdiom::Phone).unwrap();
        assert_eq!(layout.rows.len(), 4, "{class:?}");
        assert_eq!(layout.shift_key_count(), 0, "{class:?}");
        for digit in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"] {
            assert!(layout.contains(&Key::letter(digit)), "{class:?} missing {digit}");
        }
        assert!(layout.contains(&Key::Done));
        assert!(layout.contains(&Key::Backspace));
    }
}

#[test]
fn shift_pair_anchors_its_row() {
    let layout = KeyboardLayout::resolve(InputTypeClass::Text, DeviceIdiom::Phone).unwrap();
    let row = &layout.rows[3].keys;
    assert_eq!(row.first(), Some(&Key::Shift { left: true }));
    assert_eq!(row.last(), Some(&Key::Shift { left: false }));
    assert_eq!(row.iter().filter(|k| k.is_shift()).count(), 2);
}

#[test]
fn unknown_classification_fails_loudly() {
    let err = KeyboardLayout::resolve(InputTypeClass::Other(7), DeviceIdiom::Phone).unwrap_err();
    assert!(matches!(err, LayoutError::UnhandledClassification(InputTypeClass::Other(7))));
}

#[test]
fn numeric_aspect_widens_off_phone() {
    let phone = KeyboardLayout::resolve(InputTypeClass::NumberPad, DeviceIdiom::Phone).unwrap();
    let tablet = KeyboardLayout::resolve(InputTypeClass::NumberPad, DeviceIdiom::Tablet).unwrap();
    assert_eq!(phone.key_aspect, 1.0);
    assert_eq!(tablet.key_aspect, 1.33);

    // The full layout never widens.
    let full = KeyboardLayout::resolve(InputTypeClass::Text, DeviceIdiom::Tablet).unwrap();
    assert_eq!(full.key_aspect, 1.0);
}

#[test]
fn resolution_is_pure() {
    let a = KeyboardLayout::resolve(InputTypeClass::Email, DeviceIdiom::Tablet).unwrap();
    let b = KeyboardLayout::resolve(InputTypeClass::Email, DeviceIdiom::Tablet).unwrap();
    assert_eq!(a, b);
}

#[test]
fn key_metadata_is_derived() {
    assert!(Key::Shift { left: true }.is_shift());
    assert!(!Key::Done.is_shift());
    assert!(Key::letter("q").produces_text());
    assert!(!Key::Backspace.produces_text());
    assert_eq!(Key::Backspace.title(), "delete");
    assert_eq!(Key::Blank.title(), "");
    assert_eq!(Key::letter(".com").text_value(), Some(".com"));
    assert!(Key::letter(".com").is_domain_suffix());
    assert!(!Key::letter(".org").is_domain_suffix());
}

#[test]
fn layout_crosses_renderer_boundary_as_data() {
    let layout = KeyboardLayout::resolve(InputTypeClass::Url, DeviceIdiom::Phone).unwrap();
    let json = serde_json::to_string(&layout).unwrap();
    let back: KeyboardLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(layout, back);

    assert_eq!(serde_json::to_string(&Key::letter("q")).unwrap(), r#"{"Letter":"q"}"#);
    assert_eq!(serde_json::to_string(&Key::Backspace).unwrap(), r#""Backspace""#);
}
