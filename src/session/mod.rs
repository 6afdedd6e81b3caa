//! Stateful keyboard session: one layout bound to one input target.
//!
//! A `KeyboardSession` owns the resolved layout and the caps state for its
//! target, mediates key-press intents into text mutations (consulting the
//! target's validation hook first), and exposes the live key-state snapshot
//! the renderer draws from. Everything is synchronous; a declined text
//! change is a normal outcome, not an error.

pub(crate) mod types;

use std::rc::Weak;
use std::time::Instant;

use tracing::{debug, debug_span};

use crate::caps::{self, AutocapPolicy};
use crate::key::{Key, DOMAIN_SUFFIX};
use crate::layout::{DeviceIdiom, InputTypeClass, KeyboardLayout, LayoutError};
use crate::target::{InputTarget, TargetRef};
use crate::timer::Interval;

pub use types::{PressResponse, SideEffects};

use types::INPUT_TYPE_POLL_PERIOD;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("input target is gone")]
    TargetGone,
}

/// One active keyboard, bound to one input target.
pub struct KeyboardSession {
    /// Back-reference only; the session never owns the target's lifetime.
    target: Option<Weak<dyn InputTarget>>,
    layout: KeyboardLayout,
    input_type: InputTypeClass,
    idiom: DeviceIdiom,
    caps_on: bool,
    poll: Interval,
}

impl KeyboardSession {
    /// Bind to a target: resolve the layout for its current input type,
    /// initialize caps from its policy and text, start the input-type poll.
    pub fn attach(
        target: &TargetRef,
        idiom: DeviceIdiom,
        now: Instant,
    ) -> Result<Self, SessionError> {
        let input_type = target.input_type();
        let layout = KeyboardLayout::resolve(input_type, idiom)?;
        let mut poll = Interval::new(INPUT_TYPE_POLL_PERIOD);
        poll.start(now);
        let mut session = Self {
            target: Some(std::rc::Rc::downgrade(target)),
            layout,
            input_type,
            idiom,
            caps_on: false,
            poll,
        };
        session.check_auto_capitalization();
        Ok(session)
    }

    /// Release the target reference and stop the poll. Idempotent.
    pub fn detach(&mut self) {
        self.poll.cancel();
        self.target = None;
    }

    pub fn is_attached(&self) -> bool {
        self.target().is_some()
    }

    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    pub fn input_type(&self) -> InputTypeClass {
        self.input_type
    }

    pub fn caps_on(&self) -> bool {
        self.caps_on
    }

    /// Key face the renderer should draw, respecting the caps state and the
    /// domain-suffix exemption.
    pub fn display_text(&self, key: &Key) -> String {
        match key.text_value() {
            Some(text) => self.effective_text(text),
            None => key.title().to_string(),
        }
    }

    /// Process a pressed key. Exhaustive over key kinds.
    pub fn handle_key_press(&mut self, key: &Key) -> PressResponse {
        let _span = debug_span!("handle_key_press", ?key).entered();
        match key {
            Key::Letter(text) => self.handle_letter(text),
            Key::Backspace => self.handle_backspace(),
            Key::Shift { .. } => {
                // Pure state toggle; the delegate is never consulted.
                self.caps_on = !self.caps_on;
                PressResponse {
                    side_effects: SideEffects {
                        caps_changed: true,
                        ..SideEffects::default()
                    },
                    ..PressResponse::noop()
                }
            }
            Key::Done => self.done_response(false),
            Key::Dismiss => self.done_response(true),
            Key::Blank => PressResponse::noop(),
        }
    }

    /// Re-read the target's input-type classification if the poll interval
    /// elapsed. `Ok(true)` means the layout was re-resolved. A vanished
    /// target or unhandled classification is fatal to the session.
    pub fn poll_input_type(&mut self, now: Instant) -> Result<bool, SessionError> {
        if !self.poll.fire_due(now) {
            return Ok(false);
        }
        let target = self.target().ok_or(SessionError::TargetGone)?;
        let class = target.input_type();
        if class == self.input_type {
            return Ok(false);
        }
        debug!(?class, "input type changed, re-resolving layout");
        self.layout = KeyboardLayout::resolve(class, self.idiom)?;
        self.input_type = class;
        Ok(true)
    }

    fn target(&self) -> Option<TargetRef> {
        self.target.as_ref()?.upgrade()
    }

    fn effective_text(&self, literal: &str) -> String {
        // The domain suffix never participates in case transformation.
        if literal == DOMAIN_SUFFIX {
            return literal.to_string();
        }
        if self.caps_on {
            literal.to_uppercase()
        } else {
            literal.to_lowercase()
        }
    }

    fn handle_letter(&mut self, literal: &str) -> PressResponse {
        let effective = self.effective_text(literal);
        if !self.request_text_change(&effective) {
            return PressResponse::noop();
        }
        let Some(target) = self.target() else {
            return PressResponse::noop();
        };
        let was_caps = self.caps_on;
        self.caps_on = caps::on_text_inserted(&effective, self.caps_on, target.autocapitalization());
        self.check_auto_capitalization();

        let mut resp = PressResponse::inserted(effective);
        resp.side_effects.caps_changed = was_caps != self.caps_on;
        resp
    }

    fn handle_backspace(&mut self) -> PressResponse {
        let Some(target) = self.target() else {
            return PressResponse::noop();
        };
        if target.current_text().is_empty() {
            return PressResponse::noop();
        }
        target.delete_backward();
        PressResponse {
            deleted: true,
            ..PressResponse::noop()
        }
    }

    fn done_response(&mut self, force: bool) -> PressResponse {
        let released = self.try_done(force);
        PressResponse {
            side_effects: SideEffects {
                focus_released: released,
                ..SideEffects::default()
            },
            ..PressResponse::noop()
        }
    }

    /// Text-entry mediation: consult the target's validation hook before
    /// inserting at the caret. Returns whether the change was applied.
    fn request_text_change(&mut self, text: &str) -> bool {
        let Some(target) = self.target() else {
            return false;
        };
        let start = target.current_text().chars().count();
        let range = start..start + text.chars().count();
        if target.validate_change(range, text) == Some(false) {
            return false;
        }
        target.insert_at_caret(text);
        true
    }

    /// Return-key handling shared by Done and Dismiss. Relinquishing focus
    /// is only attempted when the target reports itself eligible, and only
    /// when forced or no owning delegate exists.
    fn try_done(&mut self, force: bool) -> bool {
        let Some(target) = self.target() else {
            return false;
        };
        if !target.has_focus() {
            return false;
        }
        if target.on_return_key() == Some(false) {
            return false;
        }
        if !target.can_relinquish_focus() {
            return false;
        }
        if force || !target.has_delegate() {
            target.request_relinquish_focus();
            return true;
        }
        false
    }

    /// Re-evaluate auto-caps from the target's policy and text. Skipped
    /// entirely while caps is already on; the insertion path clears first.
    fn check_auto_capitalization(&mut self) {
        if self.caps_on {
            return;
        }
        let Some(target) = self.target() else {
            return;
        };
        let policy: AutocapPolicy = target.autocapitalization();
        if caps::should_capitalize_next(policy, &target.current_text()) {
            self.caps_on = true;
        }
    }
}
