//! Partner Cards
//!
//! The grid of sponsor cards and a modal that shows a copy of the card
//! clicked. The modal holds a single card; opening another replaces it.

use dioxus::prelude::*;
use portfolio_core::{OverlayId, PartnerCard};
use portfolio_ui::Modal;

use crate::context::{use_page, use_site};

/// Card body shared by the grid and the modal
#[component]
pub fn PartnerCardView(card: PartnerCard) -> Element {
    let class = format!("partner-card {}", card.tier.class());

    rsx! {
        div {
            class: "{class}",
            "data-id": "{card.id}",

            if let Some(logo) = &card.logo {
                img { src: "{logo}", alt: "{card.name} logo" }
            }
            span { class: "partner-tier", "{card.tier.label()}" }
            h3 { class: "partner-name", "{card.name}" }
            p { class: "partner-blurb", "{card.blurb}" }
            if let Some(website) = &card.website {
                a {
                    class: "partner-website",
                    href: "{website}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: move |e| e.stop_propagation(),
                    "Visit website"
                }
            }
        }
    }
}

#[component]
pub fn PartnersGrid() -> Element {
    let site = use_site();
    let mut page = use_page();

    rsx! {
        div { class: "partners-grid",
            for card in site.partners.iter() {
                div {
                    key: "{card.id}",
                    class: "partner-card-slot",
                    onclick: {
                        let id = card.id.clone();
                        move |_| {
                            if let Err(e) = page.write().open_partner(&site.partners, &id) {
                                tracing::warn!("{}", e);
                            }
                        }
                    },
                    PartnerCardView { card: card.clone() }
                }
            }
        }
    }
}

#[component]
pub fn PartnerModal() -> Element {
    let site = use_site();
    let mut page = use_page();
    let open = page.read().overlays.is_active(OverlayId::PartnerModal);
    let card = page
        .read()
        .partner()
        .and_then(|id| site.partners.get(id))
        .cloned();

    rsx! {
        Modal {
            id: OverlayId::PartnerModal.to_string(),
            class: "partner-modal".to_string(),
            open,
            on_close: move |_| {
                page.write().close(OverlayId::PartnerModal);
            },
            content_id: "partnerModalContent".to_string(),
            close_class: "partner-modal-close".to_string(),

            if let Some(card) = card {
                PartnerCardView { card }
            }
        }
    }
}
