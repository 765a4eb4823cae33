//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::pages::{contact::ContactPage, home::HomePage, projects::ProjectsPage};
use crate::util::site_config::{self, API_BASE_META, SiteConfig};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `site` is published as a `<meta>` tag so the hydrated app resolves the
/// same API base the server was configured with.
pub fn shell(options: LeptosOptions, site: SiteConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=site.api_base().to_owned()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(site_config::read_from_document());

    view! {
        <Stylesheet id="leptos" href="/pkg/despacho.css"/>
        <Title text="Despacho | Arquitectura e Interiorismo"/>

        <Router>
            <SiteHeader/>
            <main>
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("proyectos") view=ProjectsPage/>
                    <Route path=StaticSegment("contacto") view=ContactPage/>
                </Routes>
            </main>
        </Router>
    }
}
