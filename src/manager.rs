//! Session manager: the process-wide registry of active keyboards.
//!
//! `SoftKeyboardManager` reacts to focus signals from the environment,
//! enforces at-most-one session per target, and debounces rapid focus
//! changes so that focus moving directly between two inputs swaps
//! keyboards without a visible flicker. It is an explicitly constructed
//! service the host holds a reference to, not an implicit global.
//!
//! Every event returns `UiEffect`s describing what the renderer should do;
//! the manager itself draws nothing.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::layout::DeviceIdiom;
use crate::session::KeyboardSession;
use crate::target::{TargetId, TargetRef};
use crate::timer::OneShot;

/// Delay before a lost keyboard is torn down, leaving room for a same-tick
/// focus gain elsewhere to cancel it (the seamless swap).
pub const REMOVAL_DELAY: Duration = Duration::from_millis(1);

/// Renderer-bound effect. `animated: false` means the surface appears or
/// disappears without an entrance/exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEffect {
    Present { target: TargetId, animated: bool },
    Remove { target: TargetId, animated: bool },
    /// Suppress the host's built-in auxiliary toolbar for this target.
    SuppressAssistantBar { target: TargetId },
    /// The session's layout was re-resolved; rebuild the key grid.
    LayoutChanged { target: TargetId },
}

pub struct SoftKeyboardManager {
    enabled: bool,
    idiom: DeviceIdiom,
    sessions: HashMap<TargetId, KeyboardSession>,
    pending_removal: OneShot<TargetId>,
}

impl SoftKeyboardManager {
    /// Starts disabled; focus events are ignored until enabled.
    pub fn new(idiom: DeviceIdiom) -> Self {
        Self {
            enabled: false,
            idiom,
            sessions: HashMap::new(),
            pending_removal: OneShot::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggling off tears everything down immediately: the pending removal
    /// is finalized, every session detached, the registry cleared.
    pub fn set_enabled(&mut self, enabled: bool) -> Vec<UiEffect> {
        self.enabled = enabled;
        let mut effects = Vec::new();
        if !enabled {
            if let Some(prior) = self.pending_removal.cancel() {
                effects.push(UiEffect::Remove {
                    target: prior,
                    animated: false,
                });
            }
            for (id, mut session) in self.sessions.drain() {
                session.detach();
                effects.push(UiEffect::Remove {
                    target: id,
                    animated: false,
                });
            }
        }
        effects
    }

    /// Environment signal: `target` gained input focus.
    pub fn focus_gained(&mut self, target: &TargetRef, now: Instant) -> Vec<UiEffect> {
        if !self.enabled {
            return Vec::new();
        }
        if target.has_own_input_surface() {
            return Vec::new();
        }
        let id = TargetId::of(target);
        if self.sessions.contains_key(&id) {
            // Defensive: never overwrite a live session.
            warn!(?id, "focus gained for a target that already has a session");
            return Vec::new();
        }
        let session = match KeyboardSession::attach(target, self.idiom, now) {
            Ok(session) => session,
            Err(err) => {
                error!(%err, "cannot attach keyboard session");
                return Vec::new();
            }
        };
        self.sessions.insert(id, session);
        debug!(?id, sessions = self.sessions.len(), "session attached");

        let mut effects = vec![UiEffect::SuppressAssistantBar { target: id }];
        if let Some(prior) = self.pending_removal.cancel() {
            // Seamless swap: finalize the prior keyboard's removal now and
            // skip the entrance animation for the new one.
            effects.push(UiEffect::Remove {
                target: prior,
                animated: false,
            });
            effects.push(UiEffect::Present {
                target: id,
                animated: false,
            });
        } else {
            effects.push(UiEffect::Present {
                target: id,
                animated: true,
            });
        }
        effects
    }

    /// Environment signal: `target` lost input focus. The registry entry is
    /// erased immediately; the visual teardown is deferred briefly so a
    /// same-tick focus gain can swap instead.
    pub fn focus_lost(&mut self, target: &TargetRef, now: Instant) -> Vec<UiEffect> {
        let id = TargetId::of(target);
        let mut effects = Vec::new();
        let Some(mut session) = self.sessions.remove(&id) else {
            return effects;
        };
        session.detach();
        debug!(?id, "session detached, removal scheduled");
        if let Some(prior) = self.pending_removal.arm(now + REMOVAL_DELAY, id) {
            // A removal was already in flight; finalize it before tracking
            // the new one.
            effects.push(UiEffect::Remove {
                target: prior,
                animated: false,
            });
        }
        effects
    }

    /// Drive the scheduled tasks: the deferred removal and every session's
    /// input-type poll. The host pumps this from its event loop.
    pub fn advance(&mut self, now: Instant) -> Vec<UiEffect> {
        let mut effects = Vec::new();
        if let Some(id) = self.pending_removal.fire_due(now) {
            effects.push(UiEffect::Remove {
                target: id,
                animated: true,
            });
        }

        let mut failed = Vec::new();
        for (id, session) in self.sessions.iter_mut() {
            match session.poll_input_type(now) {
                Ok(true) => effects.push(UiEffect::LayoutChanged { target: *id }),
                Ok(false) => {}
                Err(err) => {
                    error!(%err, ?id, "session poll failed, tearing down");
                    failed.push(*id);
                }
            }
        }
        for id in failed {
            if let Some(mut session) = self.sessions.remove(&id) {
                session.detach();
            }
            effects.push(UiEffect::Remove {
                target: id,
                animated: false,
            });
        }
        effects
    }

    pub fn session(&self, target: &TargetRef) -> Option<&KeyboardSession> {
        self.sessions.get(&TargetId::of(target))
    }

    pub fn session_mut(&mut self, target: &TargetRef) -> Option<&mut KeyboardSession> {
        self.sessions.get_mut(&TargetId::of(target))
    }

    pub fn has_session(&self, target: &TargetRef) -> bool {
        self.sessions.contains_key(&TargetId::of(target))
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn has_pending_removal(&self) -> bool {
        self.pending_removal.is_armed()
    }
}
