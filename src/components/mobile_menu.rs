//! Slide-in mobile navigation panel.
//!
//! The panel stays mounted and slides via a class swap so the CSS transition
//! has something to run against. Anchor links close with the slide and then
//! scroll; links that change route (or leave the site) close with the
//! transition suppressed so the panel is not animating over the next page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::header::Logo;
use crate::state::ui::UiState;
use crate::util::links::{self, LinkTarget, SITE_LINKS};
use crate::util::scroll;

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

/// Fullscreen mobile menu, always mounted, slid in and out by class.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let panel_class = move || {
        let state = ui.get();
        menu_class(state.menu_open, state.menu_instant)
    };

    let on_backdrop = move |_| ui.update(|state| state.close_menu());

    let book_navigate = navigate.clone();
    let on_book = move |_| {
        ui.update(|state| state.close_menu());
        let nav = book_navigate.clone();
        scroll::follow_anchor(&pathname.get_untracked(), links::CONTACT_SECTION_ID, move |path| {
            nav(path, NavigateOptions::default());
        });
    };

    let menu_links = SITE_LINKS
        .iter()
        .map(|link| {
            let navigate = navigate.clone();
            let on_link = move |ev: leptos::ev::MouseEvent| match links::classify_href(link.href) {
                LinkTarget::Anchor(id) => {
                    ev.prevent_default();
                    ui.update(|state| state.close_menu());
                    let nav = navigate.clone();
                    scroll::follow_anchor(&pathname.get_untracked(), id, move |path| {
                        nav(path, NavigateOptions::default());
                    });
                }
                LinkTarget::Route(_) | LinkTarget::External(_) => {
                    ui.update(|state| state.close_menu_without_transition());
                }
            };
            view! {
                <a href=link.href class="mobile-menu__link" on:click=on_link>
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class=panel_class on:click=on_backdrop>
            <div class="mobile-menu__content" on:click=move |ev| ev.stop_propagation()>
                <div class="mobile-menu__top">
                    <Logo/>
                    <button
                        class="mobile-menu__close"
                        title="Close menu"
                        on:click=move |_| ui.update(|state| state.close_menu())
                    >
                        "×"
                    </button>
                </div>
                <nav class="mobile-menu__nav">{menu_links}</nav>
                <button class="btn btn--primary mobile-menu__book" on:click=on_book>
                    "Book Appointment"
                </button>
            </div>
        </div>
    }
}

fn menu_class(open: bool, instant: bool) -> String {
    let mut class = "mobile-menu".to_owned();
    if open {
        class.push_str(" mobile-menu--open");
    }
    if instant {
        class.push_str(" mobile-menu--instant");
    }
    class
}
