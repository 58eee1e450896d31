//! Page sections, top to bottom.

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::{format_chf, TextSection};
use portfolio_ui::{Button, ButtonVariant, Reveal};

use crate::browser;
use crate::components::achievements::AchievementCarousel;
use crate::components::navbar::NavAnchor;
use crate::components::partners::PartnersGrid;
use crate::components::timeline::ZoomTimeline;
use crate::context::{use_page, use_site};

/// Reveal block bound to the page's reveal set
#[component]
fn Revealed(
    reveal_key: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let page = use_page();
    let revealed = page.read().reveals.is_revealed(&reveal_key);

    rsx! {
        Reveal { reveal_key, revealed, class, {children} }
    }
}

/// Paragraphs and highlight chips of a text section
#[component]
fn SectionBody(section: TextSection) -> Element {
    rsx! {
        for (i, paragraph) in section.paragraphs.iter().enumerate() {
            p { key: "{i}", class: "body-text", "{paragraph}" }
        }
        if !section.highlights.is_empty() {
            ul { class: "highlights",
                for highlight in section.highlights.iter() {
                    li { key: "{highlight}", "{highlight}" }
                }
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let hero = &use_site().hero;

    rsx! {
        section { id: "hero", class: "hero",
            h1 { class: "hero-title",
                span { class: "first", "{hero.first_name}" }
                span { class: "last", "{hero.last_name}" }
            }
            p { class: "hero-tagline", "{hero.tagline}" }
            div { class: "hero-actions",
                NavAnchor {
                    href: "#sponsorship",
                    class: "btn btn-primary hero-sponsor-link",
                    "{hero.sponsor_cta}"
                }
                NavAnchor {
                    href: "#achievements",
                    class: "btn btn-outline",
                    "Achievements"
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let about = use_site().about.clone();

    rsx! {
        section { id: "about",
            Revealed { reveal_key: "about",
                h2 { class: "section-title", "{about.title}" }
                SectionBody { section: about }
            }
        }
    }
}

/// Kickboxing story, including the zoomable timeline
#[component]
pub fn Kickboxing() -> Element {
    let kickboxing = use_site().kickboxing.clone();

    rsx! {
        section { id: "kickboxing",
            Revealed { reveal_key: "kickboxing",
                h2 { class: "section-title", "{kickboxing.title}" }
                SectionBody { section: kickboxing }
            }
            Revealed { reveal_key: "timeline",
                ZoomTimeline {}
            }
        }
    }
}

#[component]
pub fn Education() -> Element {
    let education = use_site().education.clone();

    rsx! {
        section { id: "education",
            Revealed { reveal_key: "education",
                h2 { class: "section-title", "{education.title}" }
                SectionBody { section: education }
            }
        }
    }
}

#[component]
pub fn Achievements() -> Element {
    rsx! {
        section { id: "achievements",
            Revealed { reveal_key: "achievements",
                h2 { class: "section-title", "Achievements" }
                AchievementCarousel {}
            }
        }
    }
}

/// Season budget table
#[component]
pub fn Budget() -> Element {
    let site = use_site();
    let total = format_chf(site.plan_total_chf());
    let rows: Vec<(String, String)> = site
        .plan
        .iter()
        .map(|item| (item.label.clone(), format_chf(item.amount_chf)))
        .collect();

    rsx! {
        section { id: "budget",
            Revealed { reveal_key: "budget",
                h2 { class: "section-title", "My Plan" }
                table { class: "plan-table",
                    tbody {
                        for (label, amount) in rows {
                            tr { key: "{label}",
                                td { "{label}" }
                                td { "{amount}" }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            td { "Total" }
                            td { "{total}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    let site = use_site();

    rsx! {
        section { id: "gallery",
            Revealed { reveal_key: "gallery", class: "gallery-grid",
                for image in site.gallery.iter() {
                    img { key: "{image.src}", src: "{image.src}", alt: "{image.alt}", loading: "lazy" }
                }
            }
        }
    }
}

#[component]
pub fn Sponsorship() -> Element {
    let sponsorship = use_site().sponsorship.clone();

    rsx! {
        section { id: "sponsorship",
            Revealed { reveal_key: "sponsorship",
                h2 { class: "section-title", "{sponsorship.title}" }
                SectionBody { section: sponsorship }
            }
            Revealed { reveal_key: "partners",
                PartnersGrid {}
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let contact = &use_site().contact;

    rsx! {
        section { id: "contact",
            Revealed { reveal_key: "contact",
                h2 { class: "section-title", "Contact" }
                ul { class: "contact-list",
                    li {
                        a { href: "mailto:{contact.email}", "{contact.email}" }
                    }
                    if let Some(instagram) = &contact.instagram {
                        li {
                            a {
                                href: "https://instagram.com/{instagram}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "@{instagram}"
                            }
                        }
                    }
                    if let Some(location) = &contact.location {
                        li { "{location}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let year = chrono::Local::now().year();

    rsx! {
        footer { id: "footer", class: "footer",
            span { "© {year} {site.hero.first_name} {site.hero.last_name}" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| browser::print(),
                "Print portfolio"
            }
        }
    }
}
