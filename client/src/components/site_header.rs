//! Top navigation shared by every page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">"Despacho"</A>
            <nav class="site-header__nav">
                <A href="/proyectos">"Proyectos"</A>
                <A href="/contacto">"Contacto"</A>
            </nav>
        </header>
    }
}
