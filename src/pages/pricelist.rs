//! Standalone price list page.

use leptos::prelude::*;

use crate::util::viewport;

struct PriceRow {
    service: &'static str,
    duration: &'static str,
    price: &'static str,
}

const PRICES: &[PriceRow] = &[
    PriceRow { service: "Consultation", duration: "30 min", price: "Free" },
    PriceRow { service: "Starter Locs (comb coils)", duration: "2.5 hrs", price: "£65" },
    PriceRow { service: "Starter Locs (two-strand)", duration: "3 hrs", price: "£75" },
    PriceRow { service: "Loc Retwist", duration: "1.5 hrs", price: "£45" },
    PriceRow { service: "Retwist & Style", duration: "2 hrs", price: "£60" },
    PriceRow { service: "Knotless Braids (medium)", duration: "4 hrs", price: "£80" },
    PriceRow { service: "Knotless Braids (small)", duration: "5.5 hrs", price: "£110" },
    PriceRow { service: "Silk Press", duration: "2 hrs", price: "£55" },
    PriceRow { service: "Deep Treatment", duration: "45 min", price: "£35" },
    PriceRow { service: "Kids' Styles (under 12)", duration: "1.5 hrs", price: "£35" },
];

/// Full service menu with durations and prices.
#[component]
pub fn PriceListPage() -> impl IntoView {
    let watchers = StoredValue::new_local(None);
    Effect::new(move || watchers.set_value(Some(viewport::watch_page())));
    on_cleanup(move || watchers.update_value(|handles| drop(handles.take())));

    view! {
        <section class="section">
            <h2 class="section__title">"Price List"</h2>
            <div class="card pricelist-card">
                <table class="pricelist-table">
                    <thead>
                        <tr>
                            <th>"Service"</th>
                            <th>"Duration"</th>
                            <th>"Price"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {PRICES
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.service}</td>
                                        <td class="pricelist-table__duration">{row.duration}</td>
                                        <td class="pricelist-table__price">{row.price}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
            <p class="section__lead">
                "Longer or denser hair can take more time; we confirm the final quote at "
                "your consultation."
            </p>
        </section>
    }
}
