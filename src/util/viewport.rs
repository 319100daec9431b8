//! Viewport-driven behaviors: reveal-on-scroll and lazy image loading.
//!
//! DESIGN
//! ======
//! Both behaviors ride on `IntersectionObserver`. Reveal marks content
//! blocks with a `fade-in` class the first time they cross 10% visibility
//! (biased 50px early via the root margin) and never unmarks them. Lazy
//! loading promotes an image's `data-src` to `src` on first sight. Each page
//! installs its own watchers on mount because route changes swap the
//! observed elements out from under a page-lifetime observer; the returned
//! handles disconnect on drop so old observers do not pile up across
//! navigations.

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Visibility fraction at which an element counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin shrinking the viewport's bottom edge, so elements reveal
/// slightly before they would naturally enter.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Class added to a revealed element.
pub const REVEAL_CLASS: &str = "fade-in";

/// Content blocks that participate in reveal-on-scroll.
pub const REVEAL_SELECTORS: &str = ".card, .service-card, .gallery-item";

/// Images that participate in lazy loading.
pub const LAZY_SELECTOR: &str = "img[data-src]";

/// Attribute holding a lazy image's real source.
pub const LAZY_SRC_ATTR: &str = "data-src";

/// Class removed from a lazy image once its source is set.
pub const LAZY_CLASS: &str = "lazy";

#[cfg(feature = "csr")]
type EntryCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Keeps an observer and its callback alive; disconnects the observer when
/// dropped.
#[derive(Default)]
pub struct WatchHandle {
    #[cfg(feature = "csr")]
    observer: Option<web_sys::IntersectionObserver>,
    #[cfg(feature = "csr")]
    _callback: Option<EntryCallback>,
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        #[cfg(feature = "csr")]
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

/// Observe the page's content blocks and mark each with `fade-in` the first
/// time it becomes visible.
#[must_use]
pub fn watch_reveal_targets() -> WatchHandle {
    #[cfg(feature = "csr")]
    {
        let callback: EntryCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) else {
            return WatchHandle::default();
        };

        observe_matching(&observer, REVEAL_SELECTORS);
        WatchHandle {
            observer: Some(observer),
            _callback: Some(callback),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        WatchHandle::default()
    }
}

/// Observe the page's `data-src` images and load each the first time it
/// becomes visible.
#[must_use]
pub fn load_lazy_images() -> WatchHandle {
    #[cfg(feature = "csr")]
    {
        let callback: EntryCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let Ok(image) = entry.target().dyn_into::<web_sys::HtmlImageElement>() else {
                        continue;
                    };
                    if let Some(src) = image.get_attribute(LAZY_SRC_ATTR) {
                        image.set_src(&src);
                        let _ = image.class_list().remove_1(LAZY_CLASS);
                    }
                    observer.unobserve(&image);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let Ok(observer) =
            web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        else {
            return WatchHandle::default();
        };

        observe_matching(&observer, LAZY_SELECTOR);
        WatchHandle {
            observer: Some(observer),
            _callback: Some(callback),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        WatchHandle::default()
    }
}

/// Install both page watchers at once. Pages call this on mount and drop
/// the handles on cleanup.
#[must_use]
pub fn watch_page() -> (WatchHandle, WatchHandle) {
    (watch_reveal_targets(), load_lazy_images())
}

#[cfg(feature = "csr")]
fn observe_matching(observer: &web_sys::IntersectionObserver, selectors: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(selectors) else {
        log::debug!("bad watch selector: {selectors}");
        return;
    };
    for index in 0..nodes.length() {
        let element = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok());
        if let Some(element) = element {
            observer.observe(&element);
        }
    }
}
