use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How often a session re-reads its target's input-type classification.
/// The host offers no change notification for that property, so we poll.
pub(super) const INPUT_TYPE_POLL_PERIOD: Duration = Duration::from_millis(100);

/// What a key press did. The renderer re-renders from this; the host emits
/// its change notification when `side_effects.text_changed` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressResponse {
    /// Text committed into the target, after case transformation.
    pub inserted: Option<String>,
    /// One grapheme was deleted before the caret.
    pub deleted: bool,
    pub side_effects: SideEffects,
}

impl PressResponse {
    /// Silent no-op: inert keys, declined validations, missing targets.
    pub(super) fn noop() -> Self {
        Self::default()
    }

    pub(super) fn inserted(text: String) -> Self {
        Self {
            inserted: Some(text),
            side_effects: SideEffects {
                text_changed: true,
                ..SideEffects::default()
            },
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideEffects {
    /// Emit a text-did-change notification so observers stay consistent.
    pub text_changed: bool,
    /// Caps state flipped; re-render key faces and shift highlights.
    pub caps_changed: bool,
    /// The target was asked to relinquish focus.
    pub focus_released: bool,
}
