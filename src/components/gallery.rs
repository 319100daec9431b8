//! Photo grid for the gallery section.
//!
//! Images load lazily: each starts with only a `data-src`, which the
//! viewport watcher promotes to `src` as the image scrolls in. Clicking a
//! photo opens the fullscreen overlay with the real source, so the overlay
//! never depends on whether the thumbnail has loaded yet.

use leptos::prelude::*;

use crate::state::ui::{GalleryImage, UiState};

#[derive(Clone, Copy)]
struct GalleryEntry {
    src: &'static str,
    alt: &'static str,
}

const GALLERY: &[GalleryEntry] = &[
    GalleryEntry { src: "/images/gallery-01.jpg", alt: "Starter locs, freshly parted" },
    GalleryEntry { src: "/images/gallery-02.jpg", alt: "Loc retwist with styled updo" },
    GalleryEntry { src: "/images/gallery-03.jpg", alt: "Knotless braids, waist length" },
    GalleryEntry { src: "/images/gallery-04.jpg", alt: "Silk press with curled ends" },
    GalleryEntry { src: "/images/gallery-05.jpg", alt: "Two-strand twists on natural hair" },
    GalleryEntry { src: "/images/gallery-06.jpg", alt: "Defined wash-and-go curls" },
];

/// Gallery grid; clicking a photo opens the fullscreen viewer.
#[component]
pub fn Gallery() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="gallery-grid">
            {GALLERY
                .iter()
                .map(|entry| {
                    let open = move |_| {
                        ui.update(|state| {
                            state.open_overlay(GalleryImage {
                                src: entry.src.to_owned(),
                                alt: entry.alt.to_owned(),
                            });
                        });
                    };
                    view! {
                        <div class="gallery-item" on:click=open>
                            <img class="gallery-item__image lazy" data-src=entry.src alt=entry.alt/>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
