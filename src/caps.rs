//! Capitalization engine: should the next typed letter be uppercase?
//!
//! Two pure functions drive the caps state owned by a session:
//! `should_capitalize_next` evaluates the autocapitalization policy against
//! a text snapshot, and `on_text_inserted` applies the auto-clear-after-one-
//! letter rule after a successful insertion.

use serde::{Deserialize, Serialize};

use crate::key::DOMAIN_SUFFIX;

/// Autocapitalization policy of the attached target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutocapPolicy {
    None,
    Words,
    Sentences,
    AllCharacters,
}

/// Whether the next typed letter should be capitalized, given the target's
/// policy and its current text.
pub fn should_capitalize_next(policy: AutocapPolicy, current_text: &str) -> bool {
    if current_text.is_empty() {
        return matches!(
            policy,
            AutocapPolicy::Words | AutocapPolicy::Sentences | AutocapPolicy::AllCharacters
        );
    }
    match policy {
        AutocapPolicy::None => false,
        AutocapPolicy::Words => current_text
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace),
        AutocapPolicy::Sentences => {
            // Trailing sentence terminator, optionally followed by whitespace.
            current_text
                .trim_end()
                .chars()
                .next_back()
                .is_some_and(|c| matches!(c, '.' | '!' | '?'))
        }
        AutocapPolicy::AllCharacters => true,
    }
}

/// Caps state after a successful insertion: one capitalized letter clears
/// the state unless the policy is sticky or the insertion is exempt.
///
/// Exempt insertions: whitespace-only text (space, and per the resolved
/// open question also tab/newline) and the domain-suffix literal.
pub fn on_text_inserted(inserted: &str, caps_on: bool, policy: AutocapPolicy) -> bool {
    if !caps_on {
        return false;
    }
    if policy == AutocapPolicy::AllCharacters {
        return true;
    }
    if inserted == DOMAIN_SUFFIX {
        return true;
    }
    if inserted.chars().all(char::is_whitespace) {
        return true;
    }
    false
}
