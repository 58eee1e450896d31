//! Timeline zoom state machine.
//!
//! The diagram has three sections. On wide viewports the reader can zoom into
//! one section and back out; on narrow viewports the view is pinned to a single
//! section and never returns to the overview.
//!
//! ```text
//!              hotspot(n) [wide]
//!   Unzoomed ─────────────────────▶ Zoomed(n)
//!      ▲                              │  ▲
//!      │ zoom-out / background [wide] │  │ prev / next / arrows (within 1..=3)
//!      └──────────────────────────────┘  └──┘
//!
//!   resize to narrow while Unzoomed ──▶ Zoomed(1)
//! ```
//!
//! No input is accepted until the diagram markup has been loaded.

use std::fmt;
use std::str::FromStr;

use crate::error::{PortfolioError, PortfolioResult};

/// Viewport widths at or below this are treated as mobile
pub const DEFAULT_NARROW_BREAKPOINT: f64 = 768.0;

/// Same-origin path of the diagram document
pub const DEFAULT_TIMELINE_ASSET: &str = "images/svg/timeline.svg";

/// Number of zoomable sections in the diagram
pub const SECTION_COUNT: u8 = 3;

/// A diagram section, always within `1..=SECTION_COUNT`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Section(u8);

impl Section {
    pub const FIRST: Section = Section(1);
    pub const LAST: Section = Section(SECTION_COUNT);

    pub fn new(n: u8) -> PortfolioResult<Self> {
        if (1..=SECTION_COUNT).contains(&n) {
            Ok(Section(n))
        } else {
            Err(PortfolioError::InvalidSection(n.to_string()))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn prev(&self) -> Option<Section> {
        Section::new(self.0.checked_sub(1)?).ok()
    }

    pub fn next(&self) -> Option<Section> {
        Section::new(self.0 + 1).ok()
    }

    pub fn all() -> impl Iterator<Item = Section> {
        (1..=SECTION_COUNT).map(Section)
    }
}

impl TryFrom<u8> for Section {
    type Error = PortfolioError;

    fn try_from(n: u8) -> PortfolioResult<Self> {
        Section::new(n)
    }
}

/// Parses the `data-section` attribute of a hotspot
impl FromStr for Section {
    type Err = PortfolioError;

    fn from_str(s: &str) -> PortfolioResult<Self> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| PortfolioError::InvalidSection(s.to_string()))?;
        Section::new(n)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomState {
    #[default]
    Unzoomed,
    Zoomed(Section),
}

impl ZoomState {
    pub fn section(&self) -> Option<Section> {
        match self {
            ZoomState::Unzoomed => None,
            ZoomState::Zoomed(s) => Some(*s),
        }
    }

    pub fn is_zoomed(&self) -> bool {
        matches!(self, ZoomState::Zoomed(_))
    }
}

/// Step direction for the prev/next buttons and arrow keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Where a click on the diagram landed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagramClick {
    Hotspot(Section),
    Background,
}

impl DiagramClick {
    /// Classify a click from what encloses its target.
    ///
    /// `hotspot_section` is the `data-section` value of the enclosing hotspot
    /// (empty when the attribute is missing), `None` outside any hotspot.
    /// Hotspots win over the background; clicks outside the diagram are
    /// `Ok(None)`.
    pub fn classify(
        hotspot_section: Option<&str>,
        in_diagram: bool,
    ) -> PortfolioResult<Option<DiagramClick>> {
        if let Some(section) = hotspot_section {
            return section
                .parse::<Section>()
                .map(|s| Some(DiagramClick::Hotspot(s)));
        }
        Ok(in_diagram.then_some(DiagramClick::Background))
    }
}

/// Loading state of the diagram markup
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DiagramAsset {
    #[default]
    Loading,
    Loaded(String),
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    state: ZoomState,
    asset: DiagramAsset,
    viewport_width: f64,
    narrow_breakpoint: f64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(DEFAULT_NARROW_BREAKPOINT)
    }
}

impl Timeline {
    pub fn new(narrow_breakpoint: f64) -> Self {
        Self {
            state: ZoomState::Unzoomed,
            asset: DiagramAsset::Loading,
            viewport_width: f64::INFINITY,
            narrow_breakpoint,
        }
    }

    /// Install the fetched diagram and apply the viewport's initial state.
    pub fn load(&mut self, markup: impl Into<String>, viewport_width: f64) {
        self.asset = DiagramAsset::Loaded(markup.into());
        self.viewport_width = viewport_width;
        if self.is_narrow() {
            self.zoom_to(Section::FIRST);
        }
        tracing::info!(narrow = self.is_narrow(), state = ?self.state, "timeline ready");
    }

    /// Record a failed fetch. The container stays empty and inert.
    pub fn fail(&mut self) {
        self.asset = DiagramAsset::Failed;
    }

    pub fn asset(&self) -> &DiagramAsset {
        &self.asset
    }

    pub fn markup(&self) -> Option<&str> {
        match &self.asset {
            DiagramAsset::Loaded(markup) => Some(markup),
            _ => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.asset, DiagramAsset::Loaded(_))
    }

    pub fn state(&self) -> ZoomState {
        self.state
    }

    pub fn is_zoomed(&self) -> bool {
        self.state.is_zoomed()
    }

    pub fn is_narrow(&self) -> bool {
        self.is_narrow_at(self.viewport_width)
    }

    pub fn is_narrow_at(&self, viewport_width: f64) -> bool {
        viewport_width <= self.narrow_breakpoint
    }

    /// Click inside the diagram. Ignored on narrow viewports.
    pub fn click(&mut self, target: DiagramClick) -> bool {
        if !self.is_interactive() || self.is_narrow() {
            return false;
        }
        match target {
            DiagramClick::Hotspot(section) => self.zoom_to(section),
            DiagramClick::Background if self.is_zoomed() => self.zoom_out(),
            DiagramClick::Background => false,
        }
    }

    /// Explicit zoom-out control. Suppressed on narrow viewports.
    pub fn zoom_out(&mut self) -> bool {
        if !self.can_zoom_out() {
            return false;
        }
        self.state = ZoomState::Unzoomed;
        tracing::debug!("timeline zoomed out");
        true
    }

    pub fn can_zoom_out(&self) -> bool {
        self.is_interactive() && !self.is_narrow() && self.is_zoomed()
    }

    /// Move one section left or right while zoomed; out-of-range is a no-op.
    pub fn step(&mut self, direction: Direction) -> bool {
        match self.step_target(direction) {
            Some(section) => self.zoom_to(section),
            None => false,
        }
    }

    pub fn can_step(&self, direction: Direction) -> bool {
        self.step_target(direction).is_some()
    }

    fn step_target(&self, direction: Direction) -> Option<Section> {
        if !self.is_interactive() {
            return None;
        }
        let current = self.state.section()?;
        match direction {
            Direction::Prev => current.prev(),
            Direction::Next => current.next(),
        }
    }

    /// Viewport resized. Narrowing while unzoomed pins the first section.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        self.viewport_width = viewport_width;
        if self.is_interactive() && self.is_narrow() && !self.is_zoomed() {
            return self.zoom_to(Section::FIRST);
        }
        false
    }

    fn zoom_to(&mut self, section: Section) -> bool {
        let next = ZoomState::Zoomed(section);
        if self.state == next {
            return false;
        }
        self.state = next;
        tracing::debug!(section = section.get(), "timeline zoomed");
        true
    }

    pub fn prev_disabled(&self) -> bool {
        !self.can_step(Direction::Prev)
    }

    pub fn next_disabled(&self) -> bool {
        !self.can_step(Direction::Next)
    }

    /// Class list for the timeline container, derived from the zoom state
    pub fn container_class(&self) -> String {
        match self.state {
            ZoomState::Unzoomed => "timeline-container".to_string(),
            ZoomState::Zoomed(s) => format!("timeline-container zoomed zoom-section-{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f64 = 1280.0;
    const NARROW: f64 = 375.0;

    fn loaded(width: f64) -> Timeline {
        let mut timeline = Timeline::default();
        timeline.load("<svg class=\"timeline-svg\"></svg>", width);
        timeline
    }

    fn section(n: u8) -> Section {
        Section::new(n).unwrap()
    }

    #[test]
    fn test_section_bounds() {
        assert!(Section::new(0).is_err());
        assert!(Section::new(4).is_err());
        assert_eq!(section(1).prev(), None);
        assert_eq!(section(3).next(), None);
        assert_eq!(section(2).next(), Some(section(3)));
        assert_eq!("2".parse::<Section>().unwrap(), section(2));
        assert!("two".parse::<Section>().is_err());
        assert_eq!(Section::all().count(), 3);
    }

    #[test]
    fn test_classify_hotspot_wins_over_background() {
        assert_eq!(
            DiagramClick::classify(Some("2"), true).unwrap(),
            Some(DiagramClick::Hotspot(section(2)))
        );
        assert_eq!(
            DiagramClick::classify(None, true).unwrap(),
            Some(DiagramClick::Background)
        );
    }

    #[test]
    fn test_classify_outside_diagram_is_ignored() {
        assert_eq!(DiagramClick::classify(None, false).unwrap(), None);
    }

    #[test]
    fn test_classify_bad_section_attribute() {
        assert!(matches!(
            DiagramClick::classify(Some(""), true),
            Err(PortfolioError::InvalidSection(_))
        ));
        assert!(DiagramClick::classify(Some("4"), true).is_err());
    }

    #[test]
    fn test_zoom_out_and_step_guards() {
        let mut timeline = loaded(WIDE);
        assert!(!timeline.can_zoom_out());
        assert!(!timeline.can_step(Direction::Next));

        timeline.click(DiagramClick::Hotspot(section(1)));
        assert!(timeline.can_zoom_out());
        assert!(timeline.can_step(Direction::Next));
        assert!(!timeline.can_step(Direction::Prev));

        assert!(!loaded(NARROW).can_zoom_out());
    }

    #[test]
    fn test_initial_state_by_viewport() {
        assert_eq!(loaded(WIDE).state(), ZoomState::Unzoomed);
        assert_eq!(loaded(NARROW).state(), ZoomState::Zoomed(section(1)));
        assert_eq!(loaded(768.0).state(), ZoomState::Zoomed(section(1)));
        assert_eq!(loaded(769.0).state(), ZoomState::Unzoomed);
    }

    #[test]
    fn test_hotspot_then_arrows() {
        let mut timeline = loaded(WIDE);
        assert!(timeline.click(DiagramClick::Hotspot(section(2))));
        assert_eq!(timeline.state(), ZoomState::Zoomed(section(2)));

        assert!(timeline.step(Direction::Next));
        assert_eq!(timeline.state(), ZoomState::Zoomed(section(3)));
        assert!(timeline.next_disabled());
        assert!(!timeline.prev_disabled());

        assert!(!timeline.step(Direction::Next));
        assert_eq!(timeline.state(), ZoomState::Zoomed(section(3)));
    }

    #[test]
    fn test_prev_disabled_at_first() {
        let mut timeline = loaded(WIDE);
        timeline.click(DiagramClick::Hotspot(section(1)));
        assert!(timeline.prev_disabled());
        assert!(!timeline.step(Direction::Prev));
    }

    #[test]
    fn test_step_ignored_when_unzoomed() {
        let mut timeline = loaded(WIDE);
        assert!(!timeline.step(Direction::Next));
        assert_eq!(timeline.state(), ZoomState::Unzoomed);
    }

    #[test]
    fn test_background_click_zooms_out_on_wide() {
        let mut timeline = loaded(WIDE);
        assert!(!timeline.click(DiagramClick::Background));
        timeline.click(DiagramClick::Hotspot(section(3)));
        assert!(timeline.click(DiagramClick::Background));
        assert_eq!(timeline.state(), ZoomState::Unzoomed);
    }

    #[test]
    fn test_narrow_is_pinned() {
        let mut timeline = loaded(NARROW);
        assert!(!timeline.zoom_out());
        assert!(!timeline.click(DiagramClick::Background));
        assert!(!timeline.click(DiagramClick::Hotspot(section(3))));
        assert_eq!(timeline.state(), ZoomState::Zoomed(section(1)));

        assert!(timeline.step(Direction::Next));
        assert_eq!(timeline.state(), ZoomState::Zoomed(section(2)));
    }

    #[test]
    fn test_resize_to_narrow_pins_first_section() {
        let mut timeline = loaded(WIDE);
        assert!(timeline.resize(600.0));
        assert_eq!(timeline.state(), ZoomState::Zoomed(section(1)));

        // already zoomed: resizing keeps the current section
        let mut timeline = loaded(WIDE);
        timeline.click(DiagramClick::Hotspot(section(3)));
        assert!(!timeline.resize(600.0));
        assert_eq!(timeline.state(), ZoomState::Zoomed(section(3)));

        // growing back does not unzoom
        assert!(!timeline.resize(WIDE));
        assert!(timeline.is_zoomed());
    }

    #[test]
    fn test_inert_until_loaded() {
        let mut timeline = Timeline::default();
        assert!(!timeline.click(DiagramClick::Hotspot(section(2))));
        assert!(!timeline.resize(NARROW));
        assert_eq!(timeline.state(), ZoomState::Unzoomed);

        timeline.fail();
        assert_eq!(timeline.asset(), &DiagramAsset::Failed);
        assert!(timeline.markup().is_none());
        assert!(!timeline.click(DiagramClick::Hotspot(section(2))));
    }

    #[test]
    fn test_container_class() {
        let mut timeline = loaded(WIDE);
        assert_eq!(timeline.container_class(), "timeline-container");
        timeline.click(DiagramClick::Hotspot(section(2)));
        assert_eq!(
            timeline.container_class(),
            "timeline-container zoomed zoom-section-2"
        );
    }
}
