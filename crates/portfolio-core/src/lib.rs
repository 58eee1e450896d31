//! Portfolio Core Library
//!
//! Interaction state for a single-page athlete portfolio: overlays with a
//! shared scroll lock, navbar scroll styling, one-shot scroll reveal, the
//! three-section timeline zoom and the Escape-key dispatcher.
//!
//! Nothing in this crate touches the DOM. The web front end forwards browser
//! events into [`PageState`] and renders CSS classes from it.
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{DiagramClick, Key, PageState, Section, ZoomState};
//!
//! let mut page = PageState::default();
//! page.timeline.load("<svg class=\"timeline-svg\"></svg>", 1280.0);
//!
//! page.timeline.click(DiagramClick::Hotspot(Section::new(2).unwrap()));
//! page.on_key(Key::ArrowRight);
//! assert_eq!(page.timeline.state(), ZoomState::Zoomed(Section::LAST));
//! ```

pub mod cards;
pub mod content;
pub mod error;
pub mod keyboard;
pub mod navigation;
pub mod overlay;
pub mod page;
pub mod reveal;
pub mod scroll_lock;
pub mod timeline;

// Re-exports
pub use cards::{AchievementCard, AchievementView, Card, CardRegistry, PartnerCard, PartnerTier};
pub use content::{
    format_chf, Contact, GalleryImage, Hero, NavLink, PlanItem, Settings, SiteContent, TextSection,
};
pub use error::{PortfolioError, PortfolioResult};
pub use keyboard::{dispatch_escape, dispatch_key, would_handle, Key, KeyOutcome};
pub use navigation::{anchor_target, scroll_destination, NavbarScroll, ScrollPlan, SidebarExt};
pub use overlay::{active_class, OverlayId, OverlayManager, OverlayState};
pub use page::PageState;
pub use reveal::{RevealSet, RevealState};
pub use scroll_lock::ScrollLock;
pub use timeline::{DiagramAsset, DiagramClick, Direction, Section, Timeline, ZoomState};
