#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use portfolio_core::SiteContent;

/// Site content, embedded at build time
const SITE_JSON: &str = include_str!("../content/site.json");

/// Parsed content, set once at startup
static SITE: OnceLock<SiteContent> = OnceLock::new();

/// Get the site content (empty until `main` has parsed it)
pub fn site() -> &'static SiteContent {
    SITE.get_or_init(SiteContent::default)
}

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        // a second init only happens under hot reload
        eprintln!("logger already initialised: {}", e);
    }

    match SiteContent::from_json(SITE_JSON) {
        Ok(content) => {
            tracing::info!(
                achievements = content.achievements.len(),
                partners = content.partners.len(),
                "Starting portfolio"
            );
            let _ = SITE.set(content);
        }
        Err(e) => {
            tracing::error!("Failed to load site content: {}", e);
            return;
        }
    }

    dioxus::launch(app::App);
}
