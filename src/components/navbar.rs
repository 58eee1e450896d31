//! Navigation Components
//!
//! Fixed top navbar, the mobile sidebar with its dimming overlay, and the
//! anchor link both of them use for smooth in-page scrolling.

use dioxus::prelude::*;
use portfolio_core::{active_class, OverlayId, SidebarExt};
use portfolio_ui::MenuToggle;

use crate::browser;
use crate::context::{use_page, use_site};

/// Same-page link that smooth-scrolls instead of jumping.
///
/// External links fall through to the browser's default navigation.
#[component]
pub fn NavAnchor(
    href: String,
    #[props(default)] class: Option<String>,
    /// Runs before scrolling, e.g. to close the sidebar
    #[props(default)]
    on_navigate: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let target = href.clone();

    rsx! {
        a {
            href: "{href}",
            class: class.clone(),
            onclick: move |evt| {
                if portfolio_core::anchor_target(&target).is_none() {
                    return;
                }
                evt.prevent_default();
                if let Some(handler) = &on_navigate {
                    handler.call(());
                }
                if let Err(e) = browser::smooth_scroll_to(&target) {
                    tracing::warn!("Smooth scroll to {} failed: {}", target, e);
                }
            },
            {children}
        }
    }
}

/// Top navigation bar
///
/// Gains the `scrolled` class once the page passes the scroll threshold.
#[component]
pub fn Navbar() -> Element {
    let site = use_site();
    let mut page = use_page();

    let class = page.read().navbar.class();
    let menu_open = page.read().overlays.is_sidebar_open();

    rsx! {
        nav {
            id: browser::NAVBAR_ID,
            class: "{class}",

            NavAnchor {
                href: "#hero",
                class: "logo",
                "EVA"
                span { "." }
            }

            div { class: "nav-links",
                for link in site.nav.iter() {
                    NavAnchor {
                        key: "{link.href}",
                        href: link.href.clone(),
                        "{link.label}"
                    }
                }
            }

            MenuToggle {
                active: menu_open,
                onclick: move |_| page.write().toggle_sidebar(),
            }
        }
    }
}

/// Mobile sidebar and the overlay behind it.
///
/// Overlay clicks close the sidebar; link clicks close it and then scroll.
#[component]
pub fn Sidebar() -> Element {
    let site = use_site();
    let mut page = use_page();

    let open = page.read().overlays.is_sidebar_open();
    let aside_class = active_class("sidebar-nav", open);
    let overlay_class = active_class("sidebar-overlay", open);

    let close_before_scroll = move |_: ()| {
        page.write().close_sidebar();
        // unlock before scrolling rather than on the next render
        browser::set_body_overflow(page.peek().body_overflow());
    };

    rsx! {
        aside {
            id: OverlayId::Sidebar.element_id(),
            class: "{aside_class}",
            "aria-hidden": if open { "false" } else { "true" },

            for link in site.nav.iter() {
                NavAnchor {
                    key: "{link.href}",
                    href: link.href.clone(),
                    on_navigate: close_before_scroll,
                    "{link.label}"
                }
            }
        }

        div {
            id: "sidebarOverlay",
            class: "{overlay_class}",
            onclick: move |_| page.write().close_sidebar(),
        }
    }
}
