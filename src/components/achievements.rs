//! Achievement carousel and its detail modal.

use dioxus::prelude::*;
use portfolio_core::{AchievementCard, OverlayId};
use portfolio_ui::Modal;

use crate::context::{use_page, use_site};

#[component]
pub fn AchievementCarousel() -> Element {
    let site = use_site();

    rsx! {
        div { class: "achievements-carousel",
            for card in site.achievements.iter() {
                AchievementCardView { key: "{card.id}", card: card.clone() }
            }
        }
    }
}

/// One card in the carousel. The `data-*` attributes mirror the fields the
/// modal shows.
#[component]
fn AchievementCardView(card: AchievementCard) -> Element {
    let site = use_site();
    let mut page = use_page();
    let id = card.id.clone();
    let quote = card.quote.clone().unwrap_or_default();

    rsx! {
        div {
            class: "achievement-card",
            role: "button",
            tabindex: "0",
            "data-id": "{card.id}",
            "data-category": "{card.category}",
            "data-title": "{card.title}",
            "data-location": "{card.location}",
            "data-result": "{card.result}",
            "data-description": "{card.description}",
            "data-quote": "{quote}",
            onclick: move |_| {
                if let Err(e) = page.write().open_achievement(&site.achievements, &id) {
                    tracing::warn!("{}", e);
                }
            },

            if let Some(badge) = &card.badge {
                span { class: "achievement-badge", "{badge}" }
            }
            p { class: "achievement-category", "{card.category}" }
            h3 { "{card.title}" }
            p { class: "achievement-result", "{card.result}" }
            p { class: "achievement-location", "{card.location}" }
        }
    }
}

/// Detail dialog for the last achievement card opened.
#[component]
pub fn AchievementModal() -> Element {
    let mut page = use_page();
    let open = page.read().overlays.is_active(OverlayId::AchievementModal);
    let view = page.read().achievement().clone();
    let quote = view.quote.clone().unwrap_or_default();

    rsx! {
        Modal {
            id: OverlayId::AchievementModal.to_string(),
            open,
            on_close: move |_| {
                page.write().close(OverlayId::AchievementModal);
            },
            close_id: "modalClose".to_string(),

            p { id: "modalCategory", class: "modal-category", "{view.category}" }
            h3 { id: "modalTitle", class: "modal-title", "{view.title}" }
            div { class: "modal-meta",
                span { id: "modalLocation", class: "modal-location", "{view.location}" }
                span { id: "modalResult", class: "modal-result", "{view.result}" }
            }
            p { id: "modalDescription", class: "modal-description", "{view.description}" }
            blockquote {
                id: "modalQuote",
                class: "modal-quote",
                hidden: view.quote.is_none(),
                "{quote}"
            }
        }
    }
}
