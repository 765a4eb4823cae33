//! Gallery card for a single project.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;
use crate::state::hover_preview::HoverPreview;
use crate::state::projects::ProjectRecord;
use crate::util::image::fallback_src;

/// Card with lazy preview image, hover preview and entrance animation.
///
/// Cards already on screen when mounted reveal on a stagger; the rest wait
/// for the card observer. Both are cancelled by `reveal::reset_pending`.
#[component]
pub fn ProjectCard(project: ProjectRecord, on_open: Callback<ProjectRecord>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let preview = expect_context::<RwSignal<HoverPreview>>();
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = RwSignal::new(false);
    let armed = RwSignal::new(false);
    let src = RwSignal::new(project.preview_image.clone());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::util::reveal::{self, CARD_OBSERVER_THRESHOLD};

        let Some(el) = card_ref.get() else {
            return;
        };
        if armed.get_untracked() {
            return;
        }
        armed.set(true);
        let show = move || {
            let _ = revealed.try_set(true);
        };
        if reveal::element_in_viewport(&el) {
            reveal::schedule_staggered(show);
        } else {
            reveal::observe_card(&el, CARD_OBSERVER_THRESHOLD, show);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = armed;

    let on_image_error = move |_| {
        if let Some(placeholder) = fallback_src(&src.get_untracked()) {
            src.set(placeholder.to_owned());
        }
    };

    let name = project.name.clone();
    let description = project.description.clone();
    let alt = project.name.clone();

    view! {
        <div
            class="proyecto-item"
            class:is-revealed=move || revealed.get()
            class:proyecto-item--leaving=move || gallery.with(|g| g.leaving)
            node_ref=card_ref
            on:click=move |_| on_open.run(project.clone())
        >
            <img
                src=move || src.get()
                alt=alt
                loading="lazy"
                on:error=on_image_error
                on:mouseenter=move |ev| {
                    preview.update(|p| {
                        p.show(&src.get_untracked());
                        p.move_to(ev.page_x(), ev.page_y());
                    });
                }
                on:mousemove=move |ev| preview.update(|p| p.move_to(ev.page_x(), ev.page_y()))
                on:mouseleave=move |_| preview.update(HoverPreview::hide)
            />
            <div class="proyecto-info">
                <h4>{name}</h4>
                <p>{description}</p>
            </div>
        </div>
    }
}
