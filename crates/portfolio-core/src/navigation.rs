//! Navbar scroll styling and in-page anchor navigation.

use crate::overlay::{OverlayId, OverlayManager};

/// Vertical offset past which the navbar switches to its compact style
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 100.0;

/// Edge-triggered "scrolled" flag for the navbar.
///
/// [`NavbarScroll::update`] only reports a value when it differs from the last
/// one, so the view writes the class once per crossing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarScroll {
    threshold: f64,
    scrolled: bool,
}

impl Default for NavbarScroll {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl NavbarScroll {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Feed the current `scrollY`. Returns `Some(new_flag)` on change only.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }

    /// Whether `scroll_y` would flip the flag, without recording it
    pub fn would_flip(&self, scroll_y: f64) -> bool {
        (scroll_y > self.threshold) != self.scrolled
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn class(&self) -> &'static str {
        if self.scrolled {
            "navbar scrolled"
        } else {
            "navbar"
        }
    }
}

/// Extract the element id from a same-page anchor href (`"#about"` → `"about"`).
///
/// Returns `None` for external links and for a bare `"#"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target sits just below the fixed navbar.
///
/// `rect_top` is the target's `getBoundingClientRect().top`, `page_offset` the
/// current `pageYOffset`.
pub fn scroll_destination(rect_top: f64, page_offset: f64, navbar_height: f64) -> f64 {
    rect_top + page_offset - navbar_height
}

/// Where an in-page anchor click scrolls to and what it pushes to history
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlan<'a> {
    /// Document offset for `window.scrollTo`
    pub top: f64,
    /// URL pushed with `history.pushState`
    pub hash: &'a str,
}

impl<'a> ScrollPlan<'a> {
    /// Plan the scroll for `href`.
    ///
    /// `target_top` is the bounding-rect top of the anchor's element, `None`
    /// when no element has that id. Only same-page anchors to existing
    /// elements produce a plan.
    pub fn new(
        href: &'a str,
        target_top: Option<f64>,
        page_offset: f64,
        navbar_height: f64,
    ) -> Option<Self> {
        anchor_target(href)?;
        let top = scroll_destination(target_top?, page_offset, navbar_height);
        Some(Self { top, hash: href })
    }
}

/// Sidebar queries and transitions over the shared overlay manager
pub trait SidebarExt {
    fn close_sidebar(&mut self);
    fn toggle_sidebar(&mut self);
    fn is_sidebar_open(&self) -> bool;
}

impl SidebarExt for OverlayManager {
    fn close_sidebar(&mut self) {
        self.close(OverlayId::Sidebar);
    }

    fn toggle_sidebar(&mut self) {
        self.toggle(OverlayId::Sidebar);
    }

    fn is_sidebar_open(&self) -> bool {
        self.is_active(OverlayId::Sidebar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_edge_triggered() {
        let mut nav = NavbarScroll::default();
        assert_eq!(nav.update(0.0), None);
        assert_eq!(nav.update(50.0), None);
        assert_eq!(nav.update(100.0), None);
        assert!(nav.would_flip(100.5));
        assert_eq!(nav.update(100.5), Some(true));
        assert!(!nav.would_flip(250.0));
        assert_eq!(nav.update(400.0), None);
        assert_eq!(nav.class(), "navbar scrolled");
        assert_eq!(nav.update(10.0), Some(false));
        assert_eq!(nav.class(), "navbar");
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#about"), None);
    }

    #[test]
    fn test_scroll_destination_subtracts_navbar() {
        assert_eq!(scroll_destination(320.0, 1000.0, 80.0), 1240.0);
        assert_eq!(scroll_destination(-200.0, 600.0, 70.0), 330.0);
    }

    #[test]
    fn test_scroll_plan_for_existing_anchor() {
        let plan = ScrollPlan::new("#about", Some(320.0), 1000.0, 80.0).unwrap();
        assert_eq!(plan.top, 1240.0);
        assert_eq!(plan.hash, "#about");
    }

    #[test]
    fn test_scroll_plan_skips_missing_and_external() {
        assert_eq!(ScrollPlan::new("#nowhere", None, 0.0, 80.0), None);
        assert_eq!(ScrollPlan::new("#", Some(10.0), 0.0, 80.0), None);
        assert_eq!(
            ScrollPlan::new("https://instagram.com/eva", Some(10.0), 0.0, 80.0),
            None
        );
    }

    #[test]
    fn test_sidebar_toggle() {
        let mut overlays = OverlayManager::new();
        overlays.toggle_sidebar();
        assert!(overlays.is_sidebar_open());
        assert_eq!(overlays.body_overflow(), "hidden");
        overlays.toggle_sidebar();
        assert!(!overlays.is_sidebar_open());
        assert_eq!(overlays.body_overflow(), "");
    }
}
