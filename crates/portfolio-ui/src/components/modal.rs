//! Modal Shell
//!
//! Backdrop + content panel + close button shared by every dialog on the page.
//! The backdrop stays mounted; visibility follows the `active` class so CSS
//! transitions can run in both directions.

use dioxus::prelude::*;
use portfolio_core::active_class;

use crate::components::button::{join_class, CloseButton};

/// Part of a modal a click can land on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalRegion {
    /// The dimmed backdrop itself
    Backdrop,
    /// The close button in the panel corner
    CloseButton,
    /// Anywhere else inside the content panel
    Panel,
}

impl ModalRegion {
    /// Whether this region's own handler closes the modal
    pub fn closes(&self) -> bool {
        matches!(self, ModalRegion::Backdrop | ModalRegion::CloseButton)
    }

    /// Whether a click here travels on to the backdrop handler
    pub fn reaches_backdrop(&self) -> bool {
        matches!(self, ModalRegion::Backdrop)
    }

    /// How many close calls one click here produces along its bubbling path
    pub fn close_calls(&self) -> usize {
        let own = usize::from(self.closes());
        let backdrop = *self != ModalRegion::Backdrop
            && self.reaches_backdrop()
            && ModalRegion::Backdrop.closes();
        own + usize::from(backdrop)
    }
}

/// Modal dialog
///
/// - A click on the backdrop itself closes the modal.
/// - The close button closes it without the click reaching the backdrop.
/// - Clicks inside the content panel never reach the backdrop.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         id: "partnerModal",
///         open: page.read().overlays.is_active(OverlayId::PartnerModal),
///         on_close: move |_| page.write().close(OverlayId::PartnerModal),
///         content_id: "partnerModalContent",
///         PartnerCardView { card }
///     }
/// }
/// ```
#[component]
pub fn Modal(
    /// Element id of the backdrop
    id: String,
    /// Whether the modal is showing
    open: bool,
    /// Callback for backdrop and close-button clicks
    on_close: EventHandler<()>,
    /// Extra classes on the backdrop
    #[props(default)]
    class: Option<String>,
    /// Element id of the content panel
    #[props(default)]
    content_id: Option<String>,
    /// Extra classes on the content panel
    #[props(default)]
    content_class: Option<String>,
    /// Element id of the close button
    #[props(default)]
    close_id: Option<String>,
    /// Extra classes on the close button
    #[props(default)]
    close_class: Option<String>,
    children: Element,
) -> Element {
    let backdrop_class = active_class(&join_class("modal", class.as_deref()), open);
    let panel_class = join_class("modal-content", content_class.as_deref());

    rsx! {
        div {
            id: "{id}",
            class: "{backdrop_class}",
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": if open { "false" } else { "true" },
            onclick: move |_| {
                if ModalRegion::Backdrop.closes() {
                    on_close.call(());
                }
            },

            div {
                class: "modal-panel",
                onclick: move |e| {
                    if !ModalRegion::Panel.reaches_backdrop() {
                        e.stop_propagation();
                    }
                },

                CloseButton {
                    onclick: move |_| {
                        if ModalRegion::CloseButton.closes() {
                            on_close.call(());
                        }
                    },
                    id: close_id.clone(),
                    class: close_class.clone(),
                }

                div {
                    id: content_id.clone(),
                    class: "{panel_class}",
                    {children}
                }
            }
        }
    }
}
