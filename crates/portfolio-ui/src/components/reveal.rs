//! Scroll Reveal Wrapper
//!
//! Marks a block for the one-shot entrance animation. The page's
//! IntersectionObserver finds these through the `reveal` class and reports
//! back by `data-reveal` key.

use dioxus::prelude::*;

/// Attribute carrying the reveal key
pub const REVEAL_ATTR: &str = "data-reveal";

/// Class list for a reveal block
pub fn reveal_class(extra: Option<&str>, revealed: bool) -> String {
    let mut class = String::from("reveal");
    if revealed {
        class.push_str(" active");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Reveal(
    /// Key reported back to the reveal set
    reveal_key: String,
    /// Whether the entrance animation has played
    revealed: bool,
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    let class = reveal_class(Some(&class), revealed);

    rsx! {
        div {
            class: "{class}",
            "data-reveal": "{reveal_key}",
            {children}
        }
    }
}
