//! Overlay manager: sidebar and modal activation plus the shared scroll lock.

use std::fmt;

use crate::scroll_lock::ScrollLock;

/// Every panel that layers over the page and suppresses background scroll
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OverlayId {
    Sidebar,
    AchievementModal,
    PartnerModal,
}

impl OverlayId {
    pub const ALL: [OverlayId; 3] = [
        OverlayId::Sidebar,
        OverlayId::AchievementModal,
        OverlayId::PartnerModal,
    ];

    /// Element id of the overlay root in the page markup
    pub fn element_id(&self) -> &'static str {
        match self {
            OverlayId::Sidebar => "sidebarNav",
            OverlayId::AchievementModal => "achievementModal",
            OverlayId::PartnerModal => "partnerModal",
        }
    }

    fn index(&self) -> usize {
        match self {
            OverlayId::Sidebar => 0,
            OverlayId::AchievementModal => 1,
            OverlayId::PartnerModal => 2,
        }
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    Active,
    #[default]
    Inactive,
}

impl OverlayState {
    pub fn is_active(&self) -> bool {
        matches!(self, OverlayState::Active)
    }
}

/// Owns the activation state of every overlay and the scroll lock they share.
///
/// Each active overlay holds exactly one scroll-lock reference, so repeated
/// opens never stack and closing one overlay never unlocks the page while
/// another is still open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayManager {
    states: [OverlayState; 3],
    scroll_lock: ScrollLock,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate an overlay. Returns `false` if it was already active.
    pub fn open(&mut self, id: OverlayId) -> bool {
        let state = &mut self.states[id.index()];
        if state.is_active() {
            return false;
        }
        *state = OverlayState::Active;
        if self.scroll_lock.acquire() {
            tracing::debug!("page scroll locked");
        }
        tracing::debug!(overlay = %id, holds = self.scroll_lock.holds(), "overlay opened");
        true
    }

    /// Deactivate an overlay. Returns `false` if it was not active.
    pub fn close(&mut self, id: OverlayId) -> bool {
        let state = &mut self.states[id.index()];
        if !state.is_active() {
            return false;
        }
        *state = OverlayState::Inactive;
        if self.scroll_lock.release() {
            tracing::debug!("page scroll unlocked");
        }
        tracing::debug!(overlay = %id, holds = self.scroll_lock.holds(), "overlay closed");
        true
    }

    /// Open if closed, close if open. Returns the resulting state.
    pub fn toggle(&mut self, id: OverlayId) -> OverlayState {
        if self.is_active(id) {
            self.close(id);
        } else {
            self.open(id);
        }
        self.state(id)
    }

    pub fn state(&self, id: OverlayId) -> OverlayState {
        self.states[id.index()]
    }

    pub fn is_active(&self, id: OverlayId) -> bool {
        self.state(id).is_active()
    }

    pub fn any_active(&self) -> bool {
        self.states.iter().any(OverlayState::is_active)
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn body_overflow(&self) -> &'static str {
        self.scroll_lock.body_overflow()
    }

    /// `"{base} active"` while the overlay is open, `base` otherwise
    pub fn class_for(&self, id: OverlayId, base: &str) -> String {
        active_class(base, self.is_active(id))
    }
}

/// Append the `active` modifier to a base class list when `active` is set
pub fn active_class(base: &str, active: bool) -> String {
    match (base.is_empty(), active) {
        (_, false) => base.to_string(),
        (true, true) => "active".to_string(),
        (false, true) => format!("{} active", base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_restores_scroll() {
        for id in OverlayId::ALL {
            let mut overlays = OverlayManager::new();
            let before = overlays.body_overflow();

            assert!(overlays.open(id));
            assert!(overlays.is_active(id));
            assert_eq!(overlays.body_overflow(), "hidden");

            assert!(overlays.close(id));
            assert!(!overlays.is_active(id));
            assert_eq!(overlays.body_overflow(), before);
        }
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut overlays = OverlayManager::new();
        assert!(overlays.open(OverlayId::PartnerModal));
        assert!(!overlays.open(OverlayId::PartnerModal));
        assert!(overlays.is_active(OverlayId::PartnerModal));
        assert_eq!(overlays.scroll_lock().holds(), 1);

        overlays.close(OverlayId::PartnerModal);
        assert!(!overlays.scroll_lock().is_locked());
    }

    #[test]
    fn test_two_overlays_keep_lock_until_both_close() {
        let mut overlays = OverlayManager::new();
        overlays.open(OverlayId::Sidebar);
        overlays.open(OverlayId::AchievementModal);

        overlays.close(OverlayId::AchievementModal);
        assert!(overlays.scroll_lock().is_locked());

        overlays.close(OverlayId::Sidebar);
        assert!(!overlays.scroll_lock().is_locked());
    }

    #[test]
    fn test_close_inactive_is_noop() {
        let mut overlays = OverlayManager::new();
        assert!(!overlays.close(OverlayId::Sidebar));
        assert_eq!(overlays.scroll_lock().holds(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut overlays = OverlayManager::new();
        assert_eq!(overlays.toggle(OverlayId::Sidebar), OverlayState::Active);
        assert_eq!(overlays.toggle(OverlayId::Sidebar), OverlayState::Inactive);
        assert!(!overlays.any_active());
    }

    #[test]
    fn test_class_for() {
        let mut overlays = OverlayManager::new();
        assert_eq!(overlays.class_for(OverlayId::Sidebar, "sidebar-nav"), "sidebar-nav");
        overlays.open(OverlayId::Sidebar);
        assert_eq!(
            overlays.class_for(OverlayId::Sidebar, "sidebar-nav"),
            "sidebar-nav active"
        );
        assert_eq!(active_class("", true), "active");
    }
}
