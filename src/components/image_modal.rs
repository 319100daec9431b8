//! Fullscreen viewer for a gallery image.
//!
//! Mounted into the overlay slot while it holds an image. The dialog takes
//! focus on mount so Escape works without a document-level key listener;
//! clicks on the backdrop or the close button dismiss it, clicks on the
//! dialog itself do not.

use leptos::prelude::*;

use crate::state::ui::{GalleryImage, UiState};

/// Fullscreen image overlay with backdrop, Escape, and button dismissal.
#[component]
pub fn ImageModal(image: GalleryImage) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move || ui.update(|state| state.close_overlay());

    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(dialog) = dialog_ref.get() else { return };
        let _ = dialog.focus();
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <div class="image-modal__backdrop" on:click=move |_| close()>
            <div
                class="image-modal"
                node_ref=dialog_ref
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <img class="image-modal__image" src=image.src.clone() alt=image.alt.clone()/>
                <button class="image-modal__close" on:click=move |_| close() title="Close image">
                    "×"
                </button>
            </div>
        </div>
    }
}
