//! Service offering card with a booking shortcut.
//!
//! Booking records the service in shared state and scrolls to the contact
//! section; the contact form picks the request up from there. Service cards
//! only render on the home page, so the scroll target always exists.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::links;
use crate::util::scroll;

/// One service offering in the services grid.
#[component]
pub fn ServiceCard(
    title: &'static str,
    blurb: &'static str,
    price: &'static str,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_book = move |_| {
        ui.update(|state| state.request_booking(title));
        scroll::scroll_to_section(links::CONTACT_SECTION_ID);
    };

    view! {
        <div class="service-card">
            <h3 class="service-card__title">{title}</h3>
            <p class="service-card__blurb">{blurb}</p>
            <span class="service-card__price">{price}</span>
            <button class="btn service-card__book" on:click=on_book>
                "Book This Service"
            </button>
        </div>
    }
}
