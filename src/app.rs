use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::Key;

use crate::browser::{self, RevealObserver};
use crate::context::{use_page_provider, use_site};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and page state, and owns the window-level
/// listeners (scroll, resize, keydown) that feed browser events into it.
#[component]
pub fn App() -> Element {
    let site = use_site();
    let mut page = use_page_provider();
    let mut reveal_observer: Signal<Option<RevealObserver>> = use_signal(|| None);

    // Window listeners live for the whole app
    use_hook(move || {
        let on_scroll = browser::on_window("scroll", move || {
            let y = browser::scroll_y();
            if page.peek().navbar.would_flip(y) {
                page.write().on_scroll(y);
            }
        });

        let on_resize = browser::on_window("resize", move || {
            let width = browser::viewport_width();
            let crossed = {
                let state = page.peek();
                state.timeline.is_narrow_at(width) != state.timeline.is_narrow()
            };
            if crossed {
                page.write().on_resize(width);
            }
        });

        let on_keydown = browser::on_keydown(move |key| {
            let key = Key::from_dom(key);
            if page.peek().handles_key(key) {
                page.write().on_key(key);
            }
        });

        if let Err(e) = browser::expose_print() {
            tracing::warn!("Could not expose {}: {}", browser::PRINT_GLOBAL, e);
        }

        Rc::new([on_scroll, on_resize, on_keydown])
    });

    // Body overflow follows the scroll lock
    use_effect(move || {
        browser::set_body_overflow(page.read().body_overflow());
    });

    // Start the reveal observer once the sections are in the DOM
    use_effect(move || {
        if reveal_observer.peek().is_some() {
            return;
        }
        let observed = RevealObserver::observe_all(
            &site.settings.reveal_root_margin,
            move |key, is_intersecting| {
                if !is_intersecting || page.peek().reveals.is_revealed(key) {
                    return false;
                }
                page.write().reveals.observe(key, is_intersecting)
            },
        );
        match observed {
            Ok((observer, keys)) => {
                tracing::debug!(count = keys.len(), "observing reveal elements");
                let mut state = page.write();
                for key in keys {
                    state.reveals.register(key);
                }
                drop(state);
                reveal_observer.set(Some(observer));
            }
            Err(e) => tracing::error!("Failed to start reveal observer: {}", e),
        }
    });

    rsx! {
        document::Title { "{site.title}" }
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
