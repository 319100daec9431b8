//! Scroll behaviors: smooth section scrolling, header condensing, and body
//! scroll locking.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is fixed, so a plain anchor jump would hide the top of the
//! target section behind it. Smooth scrolls aim at the section's offset
//! minus the live header height instead. Anchor targets only exist on the
//! home page; following an anchor from another route first navigates home,
//! then scrolls once the sections have had a moment to render.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::links;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll depth past which the header condenses.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Delay before scrolling to a section after a cross-page navigation, giving
/// the home page time to render its sections.
pub const CROSS_PAGE_SCROLL_DELAY_MS: u32 = 100;

/// Whether the header should be in its condensed state at this scroll depth.
#[must_use]
pub fn header_is_condensed(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Window scroll position that puts a section's top just below the header.
#[must_use]
pub fn scroll_target_top(section_top: i32, header_height: i32) -> f64 {
    f64::from(section_top - header_height)
}

/// Smooth-scroll the window to the section with the given id. Missing
/// sections are skipped silently.
pub fn scroll_to_section(section_id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };
        let Some(section) = document.get_element_by_id(section_id) else {
            log::debug!("scroll target missing: #{section_id}");
            return;
        };
        let Ok(section) = section.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        let header_height = document
            .query_selector(".header")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map_or(0, |el| el.offset_height());

        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target_top(section.offset_top(), header_height));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = section_id;
    }
}

/// Follow an in-page anchor from wherever the user currently is. On the home
/// page this scrolls directly; elsewhere it navigates home first and defers
/// the scroll.
pub fn follow_anchor(current_path: &str, section_id: &str, navigate: impl FnOnce(&str)) {
    if links::is_home_path(current_path) {
        scroll_to_section(section_id);
    } else {
        navigate("/");
        scroll_to_section_after_delay(section_id);
    }
}

fn scroll_to_section_after_delay(section_id: &str) {
    #[cfg(feature = "csr")]
    {
        let id = section_id.to_owned();
        gloo_timers::callback::Timeout::new(CROSS_PAGE_SCROLL_DELAY_MS, move || {
            scroll_to_section(&id);
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = section_id;
    }
}

/// Suppress or restore body scrolling. Used while a fullscreen surface
/// (mobile menu or image overlay) is up.
pub fn set_scroll_lock(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}

/// Install the window scroll listener that keeps `header_scrolled` current.
/// The listener lives for the rest of the page.
pub fn watch_header_offset(ui: RwSignal<UiState>) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else { return };

        let listener_window = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            let condensed = listener_window
                .scroll_y()
                .map_or(false, header_is_condensed);
            if ui.get_untracked().header_scrolled != condensed {
                ui.update(|state| state.header_scrolled = condensed);
            }
        }) as Box<dyn FnMut()>);

        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            callback.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ui;
    }
}
