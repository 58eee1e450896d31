//! Keyboard routing.
//!
//! Escape closes exactly one thing, checked in a fixed order: achievement
//! modal, partner modal, sidebar, timeline zoom. Arrow keys step the timeline
//! while it is zoomed.

use crate::overlay::{OverlayId, OverlayManager};
use crate::timeline::{Direction, Timeline};

/// Keys the page reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// What a key press ended up acting on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Closed(OverlayId),
    ZoomedOut,
    Stepped(Direction),
    Ignored,
}

/// Escape priority, highest first
pub const ESCAPE_ORDER: [OverlayId; 3] = [
    OverlayId::AchievementModal,
    OverlayId::PartnerModal,
    OverlayId::Sidebar,
];

/// Close the highest-priority active overlay, else zoom the timeline out.
pub fn dispatch_escape(overlays: &mut OverlayManager, timeline: &mut Timeline) -> KeyOutcome {
    if let Some(id) = ESCAPE_ORDER.into_iter().find(|id| overlays.is_active(*id)) {
        overlays.close(id);
        return KeyOutcome::Closed(id);
    }
    if timeline.is_zoomed() && timeline.zoom_out() {
        return KeyOutcome::ZoomedOut;
    }
    KeyOutcome::Ignored
}

/// Route one key press. Arrow keys act only while the timeline is zoomed.
pub fn dispatch_key(key: Key, overlays: &mut OverlayManager, timeline: &mut Timeline) -> KeyOutcome {
    let direction = match key {
        Key::Escape => return dispatch_escape(overlays, timeline),
        Key::ArrowLeft => Direction::Prev,
        Key::ArrowRight => Direction::Next,
        Key::Other => return KeyOutcome::Ignored,
    };
    if timeline.step(direction) {
        KeyOutcome::Stepped(direction)
    } else {
        KeyOutcome::Ignored
    }
}

/// Whether [`dispatch_key`] would act on `key`, without changing anything.
pub fn would_handle(key: Key, overlays: &OverlayManager, timeline: &Timeline) -> bool {
    match key {
        Key::Escape => {
            ESCAPE_ORDER.iter().any(|id| overlays.is_active(*id)) || timeline.can_zoom_out()
        }
        Key::ArrowLeft => timeline.can_step(Direction::Prev),
        Key::ArrowRight => timeline.can_step(Direction::Next),
        Key::Other => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{DiagramClick, Section, ZoomState};

    fn wide_timeline() -> Timeline {
        let mut timeline = Timeline::default();
        timeline.load("<svg></svg>", 1440.0);
        timeline
    }

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom("a"), Key::Other);
    }

    #[test]
    fn test_escape_priority() {
        let mut overlays = OverlayManager::new();
        let mut timeline = wide_timeline();
        overlays.open(OverlayId::Sidebar);
        overlays.open(OverlayId::AchievementModal);

        assert_eq!(
            dispatch_escape(&mut overlays, &mut timeline),
            KeyOutcome::Closed(OverlayId::AchievementModal)
        );
        assert!(overlays.is_active(OverlayId::Sidebar));

        assert_eq!(
            dispatch_escape(&mut overlays, &mut timeline),
            KeyOutcome::Closed(OverlayId::Sidebar)
        );
        assert_eq!(dispatch_escape(&mut overlays, &mut timeline), KeyOutcome::Ignored);
    }

    #[test]
    fn test_escape_leaves_timeline_while_overlay_open() {
        let mut overlays = OverlayManager::new();
        let mut timeline = wide_timeline();
        timeline.click(DiagramClick::Hotspot(Section::LAST));
        overlays.open(OverlayId::PartnerModal);

        dispatch_escape(&mut overlays, &mut timeline);
        assert!(timeline.is_zoomed());

        assert_eq!(dispatch_escape(&mut overlays, &mut timeline), KeyOutcome::ZoomedOut);
        assert_eq!(timeline.state(), ZoomState::Unzoomed);
    }

    #[test]
    fn test_escape_on_narrow_timeline_is_ignored() {
        let mut overlays = OverlayManager::new();
        let mut timeline = Timeline::default();
        timeline.load("<svg></svg>", 375.0);
        assert_eq!(dispatch_escape(&mut overlays, &mut timeline), KeyOutcome::Ignored);
        assert!(timeline.is_zoomed());
    }

    #[test]
    fn test_would_handle_matches_dispatch() {
        let mut overlays = OverlayManager::new();
        let mut timeline = wide_timeline();
        assert!(!would_handle(Key::Escape, &overlays, &timeline));
        assert!(!would_handle(Key::ArrowRight, &overlays, &timeline));
        assert!(!would_handle(Key::Other, &overlays, &timeline));

        timeline.click(DiagramClick::Hotspot(Section::LAST));
        assert!(would_handle(Key::Escape, &overlays, &timeline));
        assert!(would_handle(Key::ArrowLeft, &overlays, &timeline));
        assert!(!would_handle(Key::ArrowRight, &overlays, &timeline));

        overlays.open(OverlayId::Sidebar);
        assert!(would_handle(Key::Escape, &overlays, &timeline));
        assert_eq!(
            dispatch_key(Key::Escape, &mut overlays, &mut timeline),
            KeyOutcome::Closed(OverlayId::Sidebar)
        );
    }

    #[test]
    fn test_arrows_step_timeline() {
        let mut overlays = OverlayManager::new();
        let mut timeline = wide_timeline();
        assert_eq!(
            dispatch_key(Key::ArrowRight, &mut overlays, &mut timeline),
            KeyOutcome::Ignored
        );

        timeline.click(DiagramClick::Hotspot(Section::FIRST));
        assert_eq!(
            dispatch_key(Key::ArrowRight, &mut overlays, &mut timeline),
            KeyOutcome::Stepped(Direction::Next)
        );
        assert_eq!(
            dispatch_key(Key::ArrowLeft, &mut overlays, &mut timeline),
            KeyOutcome::Stepped(Direction::Prev)
        );
        assert_eq!(
            dispatch_key(Key::ArrowLeft, &mut overlays, &mut timeline),
            KeyOutcome::Ignored
        );
    }
}
