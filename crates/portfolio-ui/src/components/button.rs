//! Button Components
//!
//! - Primary: solid red call to action (sponsor, contact)
//! - Outline: secondary action on dark backgrounds
//! - Ghost: text-only action (print)
//! - Icon: compact square button (close, timeline controls)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid call to action
    #[default]
    Primary,
    /// Bordered secondary action
    Outline,
    /// Text-only action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Join a base class with an optional extra class list
pub fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra.filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Ghost,
///         onclick: move |_| print_portfolio(),
///         "Print portfolio"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, prev/next, zoom out)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Element id, for buttons that are part of the page's markup contract
    #[props(default)]
    pub id: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Icon button. Clicks never propagate past it, so one inside an overlay
/// does not also reach the backdrop.
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            id: props.id.clone(),
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            "aria-label": "{props.aria_label}",
            onclick: move |evt| {
                evt.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(
    onclick: EventHandler<()>,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            id: id,
            class: join_class("close-btn", class.as_deref()),
            "×"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn join_class_skips_empty_extra() {
        assert_eq!(join_class("icon-btn", None), "icon-btn");
        assert_eq!(join_class("icon-btn", Some("")), "icon-btn");
        assert_eq!(join_class("icon-btn", Some("close-btn")), "icon-btn close-btn");
    }
}
