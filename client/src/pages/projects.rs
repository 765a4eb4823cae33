//! Projects gallery page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the project list once per visit, derives the category tree, and
//! renders the filtered grid plus the lightbox. `?categoria=` and `?sub=`
//! select the initial filter and pin the panel to it.
//!
//! DESIGN
//! ======
//! Each panel click spawns one selection driver: claim a ticket, wait out the
//! card fade, cancel pending reveals, then apply the plan if the ticket is
//! still current. A newer click simply makes older drivers no-ops.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::category_panel::CategoryPanel;
use crate::components::project_card::ProjectCard;
use crate::components::project_modal::ProjectModal;
use crate::state::gallery::{GalleryState, Selection};
use crate::state::hover_preview::HoverPreview;
use crate::state::modal::OpenModal;
use crate::state::projects::{LoadStatus, ProjectRecord, ProjectSession};
use crate::util::filter::Filter;
use crate::util::site_config::SiteConfig;
use crate::util::taxonomy::Taxonomy;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let query = use_query_map();

    let session = RwSignal::new(ProjectSession::default());
    let gallery = RwSignal::new(GalleryState::default());
    let modal = RwSignal::new(None::<OpenModal>);
    let preview = RwSignal::new(HoverPreview::default());
    let taxonomy = Memo::new(move |_| session.with(|s| Taxonomy::build(&s.projects)));

    provide_context(session);
    provide_context(gallery);
    provide_context(modal);
    provide_context(preview);

    let initial = query.with_untracked(|q| {
        Filter::from_query(q.get("categoria").as_deref(), q.get("sub").as_deref())
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_projects(&site).await;
            match &result {
                Ok(projects) => log::info!("gallery loaded {} projects", projects.len()),
                Err(e) => log::error!("project load failed: {e}"),
            }
            let (Some(mut next_session), Some(mut next_gallery)) =
                (session.try_get_untracked(), gallery.try_get_untracked())
            else {
                return;
            };
            crate::state::gallery::apply_load(&mut next_session, &mut next_gallery, result, initial);
            let _ = gallery.try_set(next_gallery);
            let _ = session.try_set(next_session);
        });

        on_cleanup(|| {
            let cancelled = crate::util::reveal::reset_pending();
            if cancelled > 0 {
                log::debug!("left gallery with {cancelled} pending reveals");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (site, initial);

    let on_select = Callback::new(move |selection: Selection| run_selection(gallery, session, selection));
    let on_open = Callback::new(move |project: ProjectRecord| {
        preview.update(HoverPreview::hide);
        modal.set(Some(OpenModal::new(project)));
    });

    let cards = move || {
        gallery.with(|g| {
            let seq = g.render_seq();
            g.cards
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, project)| (seq, i, project))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="proyectos">
            <aside class="proyectos-panel">
                <h2>"Proyectos"</h2>
                <CategoryPanel taxonomy=taxonomy on_select=on_select/>
            </aside>
            <div id="proyectos-filtrados" class="proyectos-grid">
                <Show when=move || session.with(|s| s.status == LoadStatus::Loading)>
                    <p class="proyectos-cargando">"Cargando proyectos..."</p>
                </Show>
                {move || gallery.with(|g| g.notice).map(|notice| view! { <p class="no-proyectos">{notice}</p> })}
                <For
                    each=cards
                    key=|(seq, i, _)| (*seq, *i)
                    children=move |(_, _, project)| view! { <ProjectCard project=project on_open=on_open/> }
                />
            </div>
        </section>
        <div class="tooltip-imagen" aria-hidden="true" style=move || preview.with(HoverPreview::style)>
            <img src=move || preview.with(|p| p.src.clone().unwrap_or_default()) alt=""/>
        </div>
        <Show when=move || modal.with(Option::is_some)>
            <ProjectModal modal=modal/>
        </Show>
    }
}

/// Drive one panel click through reset, fade and render.
fn run_selection(gallery: RwSignal<GalleryState>, session: RwSignal<ProjectSession>, selection: Selection) {
    let plan = gallery.with_untracked(|g| g.plan(&selection));
    let Some(reset) = gallery.try_update(GalleryState::begin_reset) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::gallery::FADE_OUT_MS;

        if reset.fade {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(FADE_OUT_MS))).await;
        }
        if !gallery.try_with_untracked(|g| g.is_current(reset.ticket)).unwrap_or(false) {
            log::debug!("selection {selection:?} superseded");
            return;
        }
        crate::util::reveal::reset_pending();
        let Some(projects) = session.try_with_untracked(|s| s.projects.clone()) else {
            return;
        };
        let _ = gallery.try_update(|g| g.complete(reset.ticket, &plan, &projects));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let projects = session.with_untracked(|s| s.projects.clone());
        gallery.update(|g| {
            g.complete(reset.ticket, &plan, &projects);
        });
    }
}
