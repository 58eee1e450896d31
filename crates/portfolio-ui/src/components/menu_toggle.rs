//! Hamburger toggle for the mobile sidebar.

use dioxus::prelude::*;
use portfolio_core::active_class;

/// Three-bar menu button; morphs into an X while `active`.
#[component]
pub fn MenuToggle(active: bool, onclick: EventHandler<()>) -> Element {
    let class = active_class("menu-toggle", active);

    rsx! {
        button {
            id: "menuToggle",
            class: "{class}",
            r#type: "button",
            "aria-label": "Toggle navigation",
            "aria-expanded": if active { "true" } else { "false" },
            onclick: move |_| onclick.call(()),
            span { class: "menu-bar" }
            span { class: "menu-bar" }
            span { class: "menu-bar" }
        }
    }
}
