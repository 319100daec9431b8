//! Home page: hero, about, services, gallery, and contact sections.
//!
//! Section ids double as the anchor targets the header and mobile menu
//! scroll to, so they must stay in step with the navigation table in
//! `util::links`.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::gallery::Gallery;
use crate::components::service_card::ServiceCard;
use crate::util::links;
use crate::util::scroll;
use crate::util::viewport;

struct ServiceDef {
    title: &'static str,
    blurb: &'static str,
    price: &'static str,
}

const SERVICES: &[ServiceDef] = &[
    ServiceDef {
        title: "Starter Locs",
        blurb: "Comb coils or two-strand starters, sized for your density and lifestyle.",
        price: "from £65",
    },
    ServiceDef {
        title: "Loc Retwist & Style",
        blurb: "Root maintenance, palm rolling, and a finished style that lasts.",
        price: "from £45",
    },
    ServiceDef {
        title: "Knotless Braids",
        blurb: "Lightweight, tension-free braids installed with care for your edges.",
        price: "from £80",
    },
    ServiceDef {
        title: "Silk Press",
        blurb: "Steam treatment, precision blow-dry, and a glass-smooth finish.",
        price: "from £55",
    },
    ServiceDef {
        title: "Deep Treatment",
        blurb: "Steam-assisted conditioning for dry, transitioning, or damaged hair.",
        price: "from £35",
    },
    ServiceDef {
        title: "Consultation",
        blurb: "A one-to-one session to map out your hair goals and regimen.",
        price: "free",
    },
];

/// The landing page and all of its anchor sections.
#[component]
pub fn HomePage() -> impl IntoView {
    // Cleanup closures must be Send + Sync and the watcher handles are not,
    // so they park in the reactive arena instead of the closure.
    let watchers = StoredValue::new_local(None);
    Effect::new(move || watchers.set_value(Some(viewport::watch_page())));
    on_cleanup(move || watchers.update_value(|handles| drop(handles.take())));

    let on_cta = move |_| scroll::scroll_to_section(links::CONTACT_SECTION_ID);

    view! {
        <section id="home" class="hero">
            <h1 class="hero__title">"Rooted in Natural Beauty"</h1>
            <p class="hero__lead">
                "Locs, braids, and healthy-hair care from specialists who know natural hair."
            </p>
            <button class="btn btn--primary hero__cta" on:click=on_cta>
                "Book Appointment"
            </button>
        </section>

        <section id="about" class="section">
            <h2 class="section__title">"About Eden Roots"</h2>
            <div class="card-grid">
                <div class="card">
                    <h3>"Our Story"</h3>
                    <p>
                        "Eden Roots started as a kitchen-table loc practice and grew into a "
                        "studio built around one idea: healthy hair first, styling second."
                    </p>
                </div>
                <div class="card">
                    <h3>"Our Craft"</h3>
                    <p>
                        "Every stylist here trains specifically in textured hair, from starter "
                        "locs to silk presses, so no one ever guesses with your crown."
                    </p>
                </div>
                <div class="card">
                    <h3>"Our Promise"</h3>
                    <p>
                        "No tension, no shortcuts, no products we would not use on our own "
                        "hair. You leave with a plan, not just a style."
                    </p>
                </div>
            </div>
        </section>

        <section id="services" class="section">
            <h2 class="section__title">"Services"</h2>
            <div class="services-grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <ServiceCard
                                title=service.title
                                blurb=service.blurb
                                price=service.price
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="gallery" class="section">
            <h2 class="section__title">"Gallery"</h2>
            <Gallery/>
        </section>

        <section id="contact" class="section">
            <h2 class="section__title">"Get In Touch"</h2>
            <p class="section__lead">
                "Tell us a little about your hair and what you are looking for, and we "
                "will get back to you with times and options."
            </p>
            <ContactForm/>
        </section>
    }
}
