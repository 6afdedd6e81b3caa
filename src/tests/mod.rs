//! Test support: a scriptable mock input target.
//!
//! `MockTarget` backs every session/manager test. Fields use interior
//! mutability so tests flip focus, policy, and hook results mid-scenario
//! through a shared `Rc`.

mod layout;

use std::cell::{Cell, RefCell};
use std::ops::Range;
use std::rc::Rc;

use crate::caps::AutocapPolicy;
use crate::layout::InputTypeClass;
use crate::target::{InputTarget, TargetRef};

pub(crate) struct MockTarget {
    pub text: RefCell<String>,
    pub policy: Cell<AutocapPolicy>,
    pub input_type: Cell<InputTypeClass>,
    pub focused: Cell<bool>,
    pub can_relinquish: Cell<bool>,
    pub delegate: Cell<bool>,
    pub own_input_surface: Cell<bool>,
    /// `None` = no validation hook exposed.
    pub validate_result: Cell<Option<bool>>,
    /// `None` = no return-key hook exposed.
    pub return_key_result: Cell<Option<bool>>,
    pub validate_calls: RefCell<Vec<(Range<usize>, String)>>,
    pub relinquish_requests: Cell<usize>,
}

impl MockTarget {
    pub fn new(input_type: InputTypeClass, policy: AutocapPolicy) -> Rc<Self> {
        Rc::new(Self {
            text: RefCell::new(String::new()),
            policy: Cell::new(policy),
            input_type: Cell::new(input_type),
            focused: Cell::new(true),
            can_relinquish: Cell::new(true),
            delegate: Cell::new(false),
            own_input_surface: Cell::new(false),
            validate_result: Cell::new(None),
            return_key_result: Cell::new(None),
            validate_calls: RefCell::new(Vec::new()),
            relinquish_requests: Cell::new(0),
        })
    }

    pub fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

impl InputTarget for MockTarget {
    fn current_text(&self) -> String {
        self.text.borrow().clone()
    }

    fn insert_at_caret(&self, text: &str) {
        self.text.borrow_mut().push_str(text);
    }

    fn delete_backward(&self) {
        self.text.borrow_mut().pop();
    }

    fn autocapitalization(&self) -> AutocapPolicy {
        self.policy.get()
    }

    fn input_type(&self) -> InputTypeClass {
        self.input_type.get()
    }

    fn has_focus(&self) -> bool {
        self.focused.get()
    }

    fn can_relinquish_focus(&self) -> bool {
        self.can_relinquish.get()
    }

    fn request_relinquish_focus(&self) {
        self.relinquish_requests.set(self.relinquish_requests.get() + 1);
        self.focused.set(false);
    }

    fn has_own_input_surface(&self) -> bool {
        self.own_input_surface.get()
    }

    fn has_delegate(&self) -> bool {
        self.delegate.get()
    }

    fn validate_change(&self, range: Range<usize>, replacement: &str) -> Option<bool> {
        let result = self.validate_result.get()?;
        self.validate_calls
            .borrow_mut()
            .push((range, replacement.to_string()));
        Some(result)
    }

    fn on_return_key(&self) -> Option<bool> {
        self.return_key_result.get()
    }
}

pub(crate) fn as_target(mock: &Rc<MockTarget>) -> TargetRef {
    mock.clone()
}
