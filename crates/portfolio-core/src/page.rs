//! Page-wide interaction state.
//!
//! [`PageState`] is the single owner of every piece of interactive state on
//! the page. The web front end keeps one instance in a signal, feeds browser
//! events into it and renders classes from it.

use crate::cards::{AchievementCard, AchievementView, CardRegistry, PartnerCard};
use crate::content::Settings;
use crate::error::PortfolioResult;
use crate::keyboard::{dispatch_key, would_handle, Key, KeyOutcome};
use crate::navigation::{NavbarScroll, SidebarExt};
use crate::overlay::{OverlayId, OverlayManager};
use crate::reveal::RevealSet;
use crate::timeline::Timeline;

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub overlays: OverlayManager,
    pub navbar: NavbarScroll,
    pub reveals: RevealSet,
    pub timeline: Timeline,
    achievement: AchievementView,
    partner: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl PageState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            overlays: OverlayManager::new(),
            navbar: NavbarScroll::new(settings.scroll_threshold),
            reveals: RevealSet::new(),
            timeline: Timeline::new(settings.narrow_breakpoint),
            achievement: AchievementView::default(),
            partner: None,
        }
    }

    /// Window scrolled. Returns the new navbar flag when it flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        self.navbar.update(scroll_y)
    }

    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        self.timeline.resize(viewport_width)
    }

    /// Whether [`PageState::on_key`] would change anything for `key`
    pub fn handles_key(&self, key: Key) -> bool {
        would_handle(key, &self.overlays, &self.timeline)
    }

    pub fn on_key(&mut self, key: Key) -> KeyOutcome {
        let outcome = dispatch_key(key, &mut self.overlays, &mut self.timeline);
        if outcome != KeyOutcome::Ignored {
            tracing::debug!(?key, ?outcome, "key handled");
        }
        outcome
    }

    pub fn toggle_sidebar(&mut self) {
        self.overlays.toggle_sidebar();
    }

    pub fn close_sidebar(&mut self) {
        self.overlays.close_sidebar();
    }

    /// Populate the achievement modal from a card and open it.
    pub fn open_achievement(
        &mut self,
        registry: &CardRegistry<AchievementCard>,
        card_id: &str,
    ) -> PortfolioResult<()> {
        let card = registry.lookup(card_id)?;
        self.achievement = AchievementView::from(card);
        self.overlays.open(OverlayId::AchievementModal);
        Ok(())
    }

    /// Show a partner card inside the partner modal, replacing any previous one.
    pub fn open_partner(
        &mut self,
        registry: &CardRegistry<PartnerCard>,
        card_id: &str,
    ) -> PortfolioResult<()> {
        let card = registry.lookup(card_id)?;
        self.partner = Some(card.id.clone());
        self.overlays.open(OverlayId::PartnerModal);
        Ok(())
    }

    pub fn close(&mut self, id: OverlayId) -> bool {
        self.overlays.close(id)
    }

    /// Fields currently shown by the achievement modal
    pub fn achievement(&self) -> &AchievementView {
        &self.achievement
    }

    /// Id of the partner card currently shown by the partner modal
    pub fn partner(&self) -> Option<&str> {
        self.partner.as_deref()
    }

    pub fn body_overflow(&self) -> &'static str {
        self.overlays.body_overflow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PartnerTier;
    use crate::error::PortfolioError;

    fn partners() -> CardRegistry<PartnerCard> {
        let card = |id: &str| PartnerCard {
            id: id.to_string(),
            name: id.to_uppercase(),
            tier: PartnerTier::Supporter,
            logo: None,
            blurb: String::new(),
            website: None,
        };
        CardRegistry::new(vec![card("a"), card("b")]).unwrap()
    }

    #[test]
    fn test_partner_modal_replaces_content() {
        let registry = partners();
        let mut page = PageState::default();

        page.open_partner(&registry, "a").unwrap();
        assert_eq!(page.partner(), Some("a"));
        page.close(OverlayId::PartnerModal);

        page.open_partner(&registry, "b").unwrap();
        assert_eq!(page.partner(), Some("b"));
        assert!(page.overlays.is_active(OverlayId::PartnerModal));
    }

    #[test]
    fn test_unknown_card_leaves_modal_closed() {
        let registry = partners();
        let mut page = PageState::default();
        let err = page.open_partner(&registry, "zzz").unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownCard(_)));
        assert!(!page.overlays.any_active());
        assert_eq!(page.body_overflow(), "");
    }

    #[test]
    fn test_scroll_threshold_from_settings() {
        let settings = Settings {
            scroll_threshold: 10.0,
            ..Settings::default()
        };
        let mut page = PageState::new(&settings);
        assert_eq!(page.on_scroll(11.0), Some(true));
    }
}
