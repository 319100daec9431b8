//! Fixed site header: logo, desktop nav, booking button, menu toggle.
//!
//! The header condenses once the window scrolls past the threshold tracked
//! in `UiState`. Desktop nav anchors smooth-scroll (navigating home first
//! when needed); the price list link is an ordinary router navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::ui::UiState;
use crate::util::links::{self, LinkTarget, SITE_LINKS};
use crate::util::scroll;

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Site mark shared by the header and the mobile menu.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo">
            <span class="logo__mark">"ER"</span>
            <div class="logo__text">
                <span class="logo__name">"Eden Roots"</span>
                <span class="logo__tagline">"Natural Hair Specialists"</span>
            </div>
        </div>
    }
}

/// Fixed page header with scroll-condensed styling.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let book_navigate = navigate.clone();
    let on_book = move |_| {
        let nav = book_navigate.clone();
        scroll::follow_anchor(&pathname.get_untracked(), links::CONTACT_SECTION_ID, move |path| {
            nav(path, NavigateOptions::default());
        });
    };

    let nav_links = SITE_LINKS
        .iter()
        .map(|link| match links::classify_href(link.href) {
            LinkTarget::Anchor(id) => {
                let navigate = navigate.clone();
                let on_anchor = move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    let nav = navigate.clone();
                    scroll::follow_anchor(&pathname.get_untracked(), id, move |path| {
                        nav(path, NavigateOptions::default());
                    });
                };
                view! {
                    <a href=link.href class="nav__link" on:click=on_anchor>
                        {link.label}
                    </a>
                }
                .into_any()
            }
            LinkTarget::Route(_) | LinkTarget::External(_) => view! {
                <a href=link.href class="nav__link">
                    {link.label}
                </a>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <header class=move || header_class(ui.get().header_scrolled)>
            <Logo/>
            <nav class="nav">{nav_links}</nav>
            <button class="btn btn--primary header__book" on:click=on_book>
                "Book Appointment"
            </button>
            <button
                class="menu-toggle"
                title="Open menu"
                on:click=move |_| ui.update(|state| state.open_menu())
            >
                "☰"
            </button>
        </header>
    }
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "header header--scrolled" } else { "header" }
}
