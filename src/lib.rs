//! Soft-keyboard engine: layouts, capitalization, sessions, lifecycle.
//!
//! The core model behind a software-rendered on-screen keyboard that
//! attaches to text-input targets at runtime. The renderer is an external
//! collaborator: it asks a [`session::KeyboardSession`] "what keys, in what
//! state, are currently active?" and reports presses back through
//! `handle_key_press`. The [`manager::SoftKeyboardManager`] tracks one
//! session per focused target and hands keyboards off seamlessly when
//! focus moves directly between inputs.

pub mod caps;
pub mod key;
pub mod layout;
pub mod manager;
pub mod session;
pub mod target;
pub mod timer;
pub mod trace_init;

#[cfg(test)]
mod tests;

pub use caps::AutocapPolicy;
pub use key::{Key, DOMAIN_SUFFIX};
pub use layout::{DeviceIdiom, InputTypeClass, KeyboardLayout, LayoutError, LayoutRow};
pub use manager::{SoftKeyboardManager, UiEffect, REMOVAL_DELAY};
pub use session::{KeyboardSession, PressResponse, SessionError, SideEffects};
pub use target::{InputTarget, TargetId, TargetRef};
