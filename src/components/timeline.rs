//! Zoomable Career Timeline
//!
//! Fetches the timeline diagram once, injects it, and maps clicks and the
//! three controls onto the core timeline state. Zoom is pure CSS, driven by
//! the container's class list.

use dioxus::prelude::*;
use gloo::events::EventListener;
use portfolio_core::{DiagramAsset, Direction};
use portfolio_ui::IconButton;

use crate::browser;
use crate::context::{use_page, use_site};

const CONTAINER_ID: &str = "timelineContainer";
const DIAGRAM_ID: &str = "timelineSvgContainer";

#[component]
pub fn ZoomTimeline() -> Element {
    let site = use_site();
    let mut page = use_page();
    let mut diagram_listener: Signal<Option<EventListener>> = use_signal(|| None);

    // Fetch the diagram on mount
    use_effect(move || {
        let path = site.settings.timeline_asset.clone();
        spawn(async move {
            match browser::fetch_text(&path).await {
                Ok(markup) => {
                    page.write()
                        .timeline
                        .load(markup, browser::viewport_width());
                }
                Err(e) => {
                    tracing::error!("Failed to load timeline SVG: {}", e);
                    page.write().timeline.fail();
                }
            }
        });
    });

    // Clicks inside the injected diagram are delegated to the container
    use_effect(move || {
        if diagram_listener.peek().is_some() {
            return;
        }
        match browser::on_diagram_click(DIAGRAM_ID, move |click| {
            page.write().timeline.click(click);
        }) {
            Ok(listener) => diagram_listener.set(Some(listener)),
            Err(e) => tracing::error!("Timeline click handler not attached: {}", e),
        }
    });

    let state = page.read();
    let timeline = &state.timeline;
    let class = timeline.container_class();
    let markup = timeline.markup().unwrap_or_default().to_string();
    let zoomed = timeline.is_zoomed();
    let prev_disabled = timeline.prev_disabled();
    let next_disabled = timeline.next_disabled();
    let zoom_out_disabled = !timeline.can_zoom_out();
    let failed = matches!(timeline.asset(), DiagramAsset::Failed);
    drop(state);

    rsx! {
        div {
            id: CONTAINER_ID,
            class: "{class}",

            div {
                id: DIAGRAM_ID,
                class: "timeline-svg-container",
                dangerous_inner_html: "{markup}",
            }

            div { class: "timeline-controls",
                IconButton {
                    id: "timelineNavPrev".to_string(),
                    aria_label: "Previous section".to_string(),
                    disabled: prev_disabled,
                    onclick: move |_| {
                        page.write().timeline.step(Direction::Prev);
                    },
                    "‹"
                }
                IconButton {
                    id: "timelineZoomOut".to_string(),
                    aria_label: "Zoom out".to_string(),
                    disabled: zoom_out_disabled,
                    onclick: move |_| {
                        page.write().timeline.zoom_out();
                    },
                    "−"
                }
                IconButton {
                    id: "timelineNavNext".to_string(),
                    aria_label: "Next section".to_string(),
                    disabled: next_disabled,
                    onclick: move |_| {
                        page.write().timeline.step(Direction::Next);
                    },
                    "›"
                }
            }
        }

        if !failed {
            p { class: "timeline-hint",
                if zoomed { "Use the arrows or arrow keys to move between chapters." } else { "Click a chapter to zoom in." }
            }
        }
    }
}
