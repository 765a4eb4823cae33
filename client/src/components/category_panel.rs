//! Accordion of categories and subcategories driving the gallery filter.
//!
//! DESIGN
//! ======
//! The panel only reports clicks as `Selection`s. Expansion, the URL pin and
//! the card list all live in `GalleryState`, so the panel re-renders from the
//! same state the gallery does.

use leptos::prelude::*;

use crate::state::gallery::{GalleryState, Selection};
use crate::util::filter::Filter;
use crate::util::taxonomy::{SubcategoryEntry, Taxonomy, TaxonomyNode};

#[component]
pub fn CategoryPanel(taxonomy: Memo<Taxonomy>, on_select: Callback<Selection>) -> impl IntoView {
    view! {
        <div class="categorias">
            <For
                each=move || taxonomy.with(|t| t.nodes().to_vec())
                key=|node| node.slug.clone()
                children=move |node| view! { <CategoryGroup node=node on_select=on_select/> }
            />
        </div>
    }
}

#[component]
fn CategoryGroup(node: TaxonomyNode, on_select: Callback<Selection>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let TaxonomyNode { slug, label, subcategories } = node;

    let expanded = {
        let slug = slug.clone();
        Signal::derive(move || gallery.with(|g| g.is_expanded(&slug)))
    };
    let hidden = {
        let slug = slug.clone();
        move || gallery.with(|g| g.pin.as_ref().is_some_and(|pin| !pin.shows_category(&slug)))
    };
    let on_click = {
        let slug = slug.clone();
        move |_| on_select.run(Selection::Category(slug.clone()))
    };

    view! {
        <div class="categoria" class:categoria--hidden=hidden>
            <button
                class="categoria-btn"
                class:active=move || expanded.get()
                aria-expanded=move || if expanded.get() { "true" } else { "false" }
                on:click=on_click
            >
                {label}
            </button>
            <div class="subcategoria-container" class:subcategoria-container--open=move || expanded.get()>
                {subcategories
                    .into_iter()
                    .map(|entry| view! { <SubcategoryButton category=slug.clone() entry=entry on_select=on_select/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SubcategoryButton(category: String, entry: SubcategoryEntry, on_select: Callback<Selection>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let SubcategoryEntry { slug, label } = entry;

    let hidden = {
        let slug = slug.clone();
        move || gallery.with(|g| g.pin.as_ref().is_some_and(|pin| !pin.shows_subcategory(&slug)))
    };
    let active = {
        let slug = slug.clone();
        move || gallery.with(|g| matches!(&g.filter, Filter::Subcategory(s) if *s == slug))
    };

    view! {
        <button
            class="subcategoria-btn"
            class:subcategoria-btn--hidden=hidden
            class:active=active
            on:click=move |_| {
                on_select.run(Selection::Subcategory {
                    category: category.clone(),
                    subcategory: slug.clone(),
                });
            }
        >
            {label}
        </button>
    }
}
