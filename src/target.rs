//! Host-side input target capability surface.
//!
//! The core never owns a target's lifetime or text storage; it reaches both
//! through this trait. Mutating methods take `&self` so hosts keep their
//! interior mutability to themselves and sessions can hold plain `Weak`
//! back-references.

use std::ops::Range;
use std::rc::Rc;

use crate::caps::AutocapPolicy;
use crate::layout::InputTypeClass;

pub trait InputTarget {
    fn current_text(&self) -> String;

    /// Insert text at the caret position.
    fn insert_at_caret(&self, text: &str);

    /// Delete one grapheme before the caret.
    fn delete_backward(&self);

    fn autocapitalization(&self) -> AutocapPolicy;

    fn input_type(&self) -> InputTypeClass;

    fn has_focus(&self) -> bool;

    fn can_relinquish_focus(&self) -> bool;

    fn request_relinquish_focus(&self);

    /// Targets that bring their own input surface never get a soft keyboard.
    fn has_own_input_surface(&self) -> bool {
        false
    }

    /// Whether an owning delegate exists. The Done key only relinquishes
    /// focus on delegate-less targets unless forced.
    fn has_delegate(&self) -> bool {
        false
    }

    /// Optional change-validation hook. `None` means the target exposes no
    /// hook; `Some(false)` declines the pending change.
    fn validate_change(&self, _range: Range<usize>, _replacement: &str) -> Option<bool> {
        None
    }

    /// Optional return-key hook. `Some(false)` declines the return press.
    fn on_return_key(&self) -> Option<bool> {
        None
    }
}

pub type TargetRef = Rc<dyn InputTarget>;

/// Registry key: identity of a target by allocation, mirroring a map keyed
/// by host-object identity. Stable for the life of the `Rc` allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TargetId(usize);

impl TargetId {
    pub fn of(target: &TargetRef) -> Self {
        Self(Rc::as_ptr(target) as *const () as usize)
    }
}
