//! Smooth anchor scrolling and reveal-on-scroll animations.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, HtmlInputElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::ANCHOR_SCROLL_OFFSET;
use crate::events::UiEvent;

pub const REVEAL_SELECTOR: &str = ".benefit-card, .testimonial-card, .content-item";

/// Elements count as visible once their top passes 5/6 of the viewport.
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height / 1.2
}

/// Smooth-scrolls so the element with `id` sits `offset` pixels below the
/// top. Returns false if there is no such element.
pub fn scroll_to_id(id: &str, offset: i32) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(target) = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(f64::from(target.offset_top() - offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn focus_later(id: &'static str, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        if let Some(input) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            let _ = input.focus();
        }
    })
    .forget();
}

/// Click handler for an in-page `#anchor` link.
pub fn anchor_click(href: &'static str, on_event: Callback<UiEvent>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if href == "#" {
            return;
        }
        on_event.emit(UiEvent::AnchorClick(href.to_string()));
        if scroll_to_id(href.trim_start_matches('#'), ANCHOR_SCROLL_OFFSET) {
            e.prevent_default();
        }
    })
}

fn for_each_revealable(f: impl Fn(&HtmlElement)) {
    let Some(nodes) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all(REVEAL_SELECTOR).ok())
    else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            f(&el);
        }
    }
}

fn hide_for_reveal() {
    for_each_revealable(|el| {
        let style = el.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(20px)");
        let _ = style.set_property("transition", "opacity 0.5s, transform 0.5s");
    });
}

fn reveal_visible() {
    let Some(height) = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return;
    };
    for_each_revealable(|el| {
        if should_reveal(el.get_bounding_client_rect().top(), height) {
            let style = el.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        }
    });
}

/// Hides the animated cards on mount, then fades them in as they scroll
/// into view.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        |_| {
            hide_for_reveal();
            let timeout = Timeout::new(100, reveal_visible);
            move || drop(timeout)
        },
        (),
    );

    use_event_with_window("scroll", move |_: Event| reveal_visible());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_threshold_is_five_sixths_of_viewport() {
        assert!(should_reveal(0.0, 1200.0));
        assert!(should_reveal(999.0, 1200.0));
        assert!(!should_reveal(1000.0, 1200.0));
        assert!(!should_reveal(1500.0, 1200.0));
    }
}
