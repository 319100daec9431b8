//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::image_modal::ImageModal;
use crate::components::mobile_menu::MobileMenu;
use crate::components::notification::NotificationHost;
use crate::pages::{home::HomePage, pricelist::PriceListPage};
use crate::state::{notices::NoticeState, ui::UiState};
use crate::util::{scroll, theme};

/// Root application component.
///
/// Provides the shared state contexts, applies the saved theme, installs
/// the header scroll watcher, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(ui);
    provide_context(notices);

    theme::apply(theme::load_preference());
    scroll::watch_header_offset(ui);

    // Body scrolling follows the fullscreen surfaces (menu, overlay).
    Effect::new(move || {
        scroll::set_scroll_lock(ui.get().scroll_locked());
    });

    view! {
        <Title text="Eden Roots | Natural Hair Specialists"/>

        <Router>
            <Header/>
            <MobileMenu/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("pricelist") view=PriceListPage/>
                </Routes>
            </main>
            <footer class="footer">
                <p>"© 2026 Eden Roots. All rights reserved."</p>
            </footer>
            {move || ui.get().overlay.map(|image| view! { <ImageModal image=image/> })}
            <NotificationHost/>
        </Router>
    }
}
