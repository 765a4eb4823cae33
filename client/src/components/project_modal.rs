//! Lightbox for a project: image carousel, title, subcategory and description.
//!
//! Mounted only while `Option<OpenModal>` is `Some`, so at most one instance
//! and one keydown listener exist at a time. Opening another project swaps
//! the signal value in place.

use leptos::prelude::*;

use crate::state::modal::{ModalKey, OpenModal, apply_key};

#[component]
pub fn ProjectModal(modal: RwSignal<Option<OpenModal>>) -> impl IntoView {
    let press = move |key: ModalKey| modal.update(|m| apply_key(m, key));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if let Some(key) = ModalKey::from_key(&ev.key()) {
                ev.prevent_default();
                press(key);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let title = move || modal.with(|m| m.as_ref().map(|o| o.project.name.clone()).unwrap_or_default());
    let caption = move || modal.with(|m| m.as_ref().map(OpenModal::subcategory_caption).unwrap_or_default());
    let description =
        move || modal.with(|m| m.as_ref().map(|o| o.project.description.clone()).unwrap_or_default());
    let image = move || modal.with(|m| m.as_ref().map(|o| o.carousel.current().to_owned()).unwrap_or_default());
    let no_navigation = move || modal.with(|m| m.as_ref().is_none_or(|o| !o.carousel.has_navigation()));

    view! {
        <div id="modal-proyecto" class="modal-proyecto" role="dialog" aria-modal="true" on:click=move |_| press(ModalKey::Close)>
            <div class="modal-contenido" on:click=move |ev| ev.stop_propagation()>
                <button class="close-modal" aria-label="Cerrar" on:click=move |_| press(ModalKey::Close)>
                    "×"
                </button>
                <div class="modal-galeria">
                    <button
                        class="nav-btn nav-prev"
                        class:nav-btn--hidden=no_navigation
                        aria-label="Imagen anterior"
                        on:click=move |_| press(ModalKey::Prev)
                    >
                        "‹"
                    </button>
                    <img id="modal-img" src=image alt=title/>
                    <button
                        class="nav-btn nav-next"
                        class:nav-btn--hidden=no_navigation
                        aria-label="Imagen siguiente"
                        on:click=move |_| press(ModalKey::Next)
                    >
                        "›"
                    </button>
                </div>
                <div class="modal-info">
                    <h3 id="modal-titulo">{title}</h3>
                    <p class="modal-subcategoria">{caption}</p>
                    <p id="modal-descripcion">{description}</p>
                </div>
            </div>
        </div>
    }
}
