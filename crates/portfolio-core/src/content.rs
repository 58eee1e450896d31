//! Site content and tunables.
//!
//! Everything the page shows, plus the interaction thresholds, comes from one
//! JSON document embedded at build time. Missing settings fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};

use crate::cards::{AchievementCard, CardRegistry, PartnerCard};
use crate::error::PortfolioResult;
use crate::navigation::DEFAULT_SCROLL_THRESHOLD;
use crate::reveal::DEFAULT_ROOT_MARGIN;
use crate::timeline::{DEFAULT_NARROW_BREAKPOINT, DEFAULT_TIMELINE_ASSET};

/// Interaction tunables
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `scrollY` above which the navbar is styled as scrolled
    pub scroll_threshold: f64,
    /// Widths at or below this pin the timeline to one section
    pub narrow_breakpoint: f64,
    /// IntersectionObserver root margin for reveal elements
    pub reveal_root_margin: String,
    /// Same-origin path of the timeline diagram
    pub timeline_asset: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            reveal_root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            timeline_asset: DEFAULT_TIMELINE_ASSET.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub first_name: String,
    pub last_name: String,
    pub tagline: String,
    pub sponsor_cta: String,
}

/// A titled block of paragraphs (about, kickboxing, education)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSection {
    pub title: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// One line of the season budget ("My Plan")
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub label: String,
    pub amount_chf: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Raw document shape; see [`SiteContent`] for the validated form
#[derive(Clone, Debug, Deserialize)]
struct SiteDocument {
    #[serde(default)]
    settings: Settings,
    title: String,
    nav: Vec<NavLink>,
    hero: Hero,
    about: TextSection,
    kickboxing: TextSection,
    education: TextSection,
    plan: Vec<PlanItem>,
    #[serde(default)]
    gallery: Vec<GalleryImage>,
    sponsorship: TextSection,
    contact: Contact,
    achievements: Vec<AchievementCard>,
    partners: Vec<PartnerCard>,
}

/// Validated site content with card registries built
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub settings: Settings,
    pub title: String,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub about: TextSection,
    pub kickboxing: TextSection,
    pub education: TextSection,
    pub plan: Vec<PlanItem>,
    pub gallery: Vec<GalleryImage>,
    pub sponsorship: TextSection,
    pub contact: Contact,
    pub achievements: CardRegistry<AchievementCard>,
    pub partners: CardRegistry<PartnerCard>,
}

impl SiteContent {
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let doc: SiteDocument = serde_json::from_str(json)?;
        Ok(Self {
            achievements: CardRegistry::new(doc.achievements)?,
            partners: CardRegistry::new(doc.partners)?,
            settings: doc.settings,
            title: doc.title,
            nav: doc.nav,
            hero: doc.hero,
            about: doc.about,
            kickboxing: doc.kickboxing,
            education: doc.education,
            plan: doc.plan,
            gallery: doc.gallery,
            sponsorship: doc.sponsorship,
            contact: doc.contact,
        })
    }

    pub fn plan_total_chf(&self) -> u32 {
        self.plan.iter().map(|item| item.amount_chf).sum()
    }
}

/// Format a whole-franc amount with Swiss thousands separators (`12'500`)
pub fn format_chf(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\'');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;

    const MINIMAL: &str = r##"{
        "title": "Test",
        "nav": [{ "label": "About Me", "href": "#about" }],
        "hero": { "first_name": "A", "last_name": "B", "tagline": "t", "sponsor_cta": "Become a Sponsor" },
        "about": { "title": "About", "paragraphs": [] },
        "kickboxing": { "title": "Kickboxing", "paragraphs": [] },
        "education": { "title": "Education", "paragraphs": [] },
        "plan": [{ "label": "Travel", "amount_chf": 4000 }, { "label": "Camps", "amount_chf": 8500 }],
        "sponsorship": { "title": "Sponsorship", "paragraphs": [] },
        "contact": { "email": "a@example.com" },
        "achievements": [],
        "partners": []
    }"##;

    #[test]
    fn test_settings_default_when_missing() {
        let content = SiteContent::from_json(MINIMAL).unwrap();
        assert_eq!(content.settings, Settings::default());
        assert_eq!(content.settings.scroll_threshold, 100.0);
        assert_eq!(content.settings.narrow_breakpoint, 768.0);
        assert_eq!(content.settings.timeline_asset, "images/svg/timeline.svg");
        assert!(content.gallery.is_empty());
    }

    #[test]
    fn test_partial_settings() {
        let json = MINIMAL.replacen("{", r#"{ "settings": { "narrow_breakpoint": 600 },"#, 1);
        let content = SiteContent::from_json(&json).unwrap();
        assert_eq!(content.settings.narrow_breakpoint, 600.0);
        assert_eq!(content.settings.reveal_root_margin, "0px 0px -100px 0px");
    }

    #[test]
    fn test_malformed_content() {
        assert!(matches!(
            SiteContent::from_json("{}"),
            Err(PortfolioError::Content(_))
        ));
    }

    #[test]
    fn test_plan_total() {
        let content = SiteContent::from_json(MINIMAL).unwrap();
        assert_eq!(content.plan_total_chf(), 12_500);
        assert_eq!(format_chf(content.plan_total_chf()), "12'500");
        assert_eq!(format_chf(950), "950");
        assert_eq!(format_chf(1_000_000), "1'000'000");
    }
}
