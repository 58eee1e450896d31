//! Browser glue.
//!
//! Thin wrappers over the DOM APIs the page needs: window listeners, body
//! overflow, smooth anchor scrolling, history, the reveal observer, the
//! diagram fetch and the print global. All state decisions live in
//! `portfolio_core`; this module only reads inputs and applies outputs.

use gloo::events::EventListener;
use gloo::net::http::Request;
use gloo::utils::{body, document, window};
use js_sys::{Array, Reflect};
use portfolio_core::{anchor_target, DiagramClick, PortfolioError, PortfolioResult, ScrollPlan};
use portfolio_ui::REVEAL_ATTR;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollToOptions,
};

/// Element id of the fixed navbar, used for the scroll offset
pub const NAVBAR_ID: &str = "navbar";

/// Name of the global print function exposed on `window`
pub const PRINT_GLOBAL: &str = "printPortfolio";

fn js_error(call: &'static str) -> impl Fn(JsValue) -> PortfolioError {
    move |value| PortfolioError::Browser(format!("{}: {:?}", call, value))
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY)
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Apply the scroll-lock result to `document.body.style.overflow`.
pub fn set_body_overflow(value: &str) {
    if let Err(e) = body()
        .style()
        .set_property("overflow", value)
        .map_err(js_error("style.setProperty"))
    {
        tracing::warn!("{}", e);
    }
}

/// Listen on `window` for `event`, calling `handler` with no arguments.
pub fn on_window(event: &'static str, mut handler: impl FnMut() + 'static) -> EventListener {
    EventListener::new(&window(), event, move |_| handler())
}

/// Listen for key presses anywhere in the document.
pub fn on_keydown(mut handler: impl FnMut(&str) + 'static) -> EventListener {
    EventListener::new(&document(), "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            handler(&event.key());
        }
    })
}

/// Smooth-scroll to a same-page anchor and record it in history.
///
/// Returns `Ok(false)` when `href` is not a same-page anchor or the target
/// element does not exist; nothing is scrolled or pushed in that case.
pub fn smooth_scroll_to(href: &str) -> PortfolioResult<bool> {
    let Some(id) = anchor_target(href) else {
        return Ok(false);
    };
    let target_top = document()
        .get_element_by_id(id)
        .map(|el| el.get_bounding_client_rect().top());

    let navbar_height = document()
        .get_element_by_id(NAVBAR_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .ok_or_else(|| PortfolioError::MissingElement(NAVBAR_ID.to_string()))?;
    let page_offset = window().page_y_offset().map_err(js_error("pageYOffset"))?;

    let Some(plan) = ScrollPlan::new(href, target_top, page_offset, navbar_height) else {
        tracing::debug!(href, "anchor target not found");
        return Ok(false);
    };

    let options = ScrollToOptions::new();
    options.set_top(plan.top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);

    window()
        .history()
        .map_err(js_error("history"))?
        .push_state_with_url(&JsValue::NULL, "", Some(plan.hash))
        .map_err(js_error("history.pushState"))?;

    tracing::debug!(href, top = plan.top, "smooth scroll");
    Ok(true)
}

/// Fetch a same-origin document as text. Non-ok statuses are errors.
pub async fn fetch_text(path: &str) -> PortfolioResult<String> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| PortfolioError::AssetNetwork {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    if !response.ok() {
        return Err(PortfolioError::AssetStatus {
            path: path.to_string(),
            status: response.status(),
        });
    }

    response.text().await.map_err(|e| PortfolioError::AssetBody {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Classify a click inside the timeline container.
fn classify_diagram_click(target: &Element) -> Option<DiagramClick> {
    let hotspot = target
        .closest(".timeline-section-area")
        .ok()
        .flatten()
        .map(|el| el.get_attribute("data-section").unwrap_or_default());
    let in_diagram = matches!(target.closest(".timeline-svg"), Ok(Some(_)));

    match DiagramClick::classify(hotspot.as_deref(), in_diagram) {
        Ok(click) => click,
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}

/// Delegate clicks on the injected diagram to `handler`.
pub fn on_diagram_click(
    container_id: &str,
    mut handler: impl FnMut(DiagramClick) + 'static,
) -> PortfolioResult<EventListener> {
    let container = document()
        .get_element_by_id(container_id)
        .ok_or_else(|| PortfolioError::MissingElement(container_id.to_string()))?;

    Ok(EventListener::new(&container, "click", move |event| {
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok());
        if let Some(click) = target.as_ref().and_then(classify_diagram_click) {
            handler(click);
        }
    }))
}

/// IntersectionObserver over every `.reveal` element.
///
/// Keeps the JS callback alive for as long as the value is held.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Observe all reveal elements currently in the document.
    ///
    /// `on_report(key, is_intersecting)` returns `true` when the element has
    /// just been revealed, at which point it is unobserved.
    pub fn observe_all(
        root_margin: &str,
        mut on_report: impl FnMut(&str, bool) -> bool + 'static,
    ) -> PortfolioResult<(Self, Vec<String>)> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(key) = target.get_attribute(REVEAL_ATTR) else {
                        continue;
                    };
                    if on_report(&key, entry.is_intersecting()) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(0.0));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_error("IntersectionObserver"))?;

        let nodes = document()
            .query_selector_all(".reveal")
            .map_err(js_error("querySelectorAll"))?;
        let mut keys = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if let Some(key) = element.get_attribute(REVEAL_ATTR) {
                keys.push(key);
                observer.observe(&element);
            }
        }

        Ok((
            Self {
                observer,
                _callback: callback,
            },
            keys,
        ))
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Open the browser print dialog.
pub fn print() {
    if let Err(e) = window().print().map_err(js_error("print")) {
        tracing::warn!("{}", e);
    }
}

/// Expose `window.printPortfolio()` for inline handlers and the console.
pub fn expose_print() -> PortfolioResult<()> {
    let callback = Closure::<dyn Fn()>::new(print);
    Reflect::set(&window(), &JsValue::from_str(PRINT_GLOBAL), callback.as_ref())
        .map_err(js_error("Reflect.set"))?;
    // lives for the page lifetime
    callback.forget();
    Ok(())
}
