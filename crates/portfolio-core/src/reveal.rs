//! One-shot scroll reveal tracking.
//!
//! Intersection callbacks report entries; the first intersecting report for a
//! key flips it to [`RevealState::Revealed`] for good.

use std::collections::HashMap;

/// IntersectionObserver root margin: entry fires 100px before the bottom edge
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -100px 0px";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealSet {
    states: HashMap<String, RevealState>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as observed. Already-known keys keep their state.
    pub fn register(&mut self, key: impl Into<String>) {
        self.states.entry(key.into()).or_default();
    }

    /// Handle an intersection report.
    ///
    /// Returns `true` only for the first intersecting report of a key; the
    /// caller unobserves the element at that point.
    pub fn observe(&mut self, key: &str, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        self.reveal(key)
    }

    /// Flip a key to revealed. Returns `false` if it already was.
    pub fn reveal(&mut self, key: &str) -> bool {
        let state = self.states.entry(key.to_string()).or_default();
        if *state == RevealState::Revealed {
            return false;
        }
        *state = RevealState::Revealed;
        tracing::debug!(key, "revealed");
        true
    }

    pub fn state(&self, key: &str) -> RevealState {
        self.states.get(key).copied().unwrap_or_default()
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.state(key) == RevealState::Revealed
    }

    /// `"reveal active"` once revealed, `"reveal"` while pending
    pub fn class(&self, key: &str) -> &'static str {
        if self.is_revealed(key) {
            "reveal active"
        } else {
            "reveal"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_once() {
        let mut set = RevealSet::new();
        set.register("about-intro");
        assert_eq!(set.state("about-intro"), RevealState::Pending);

        assert!(!set.observe("about-intro", false));
        assert!(set.observe("about-intro", true));
        assert!(!set.observe("about-intro", true));
        assert!(!set.observe("about-intro", false));
        assert!(set.is_revealed("about-intro"));
        assert_eq!(set.class("about-intro"), "reveal active");
    }

    #[test]
    fn test_register_does_not_reset() {
        let mut set = RevealSet::new();
        set.reveal("gallery");
        set.register("gallery");
        assert!(set.is_revealed("gallery"));
    }

    #[test]
    fn test_unknown_key_is_pending() {
        let mut set = RevealSet::new();
        set.register("a");
        set.register("b");
        set.reveal("a");
        assert_eq!(set.state("b"), RevealState::Pending);
        assert_eq!(set.class("unknown"), "reveal");
    }
}
