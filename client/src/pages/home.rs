//! Landing page: splash preloader followed by scroll-revealed sections.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::preloader::Preloader;
use crate::components::reveal::Reveal;

/// Practice areas linked straight into a filtered gallery.
const SERVICES: &[(&str, &str, &str)] = &[
    ("Arquitectura", "Proyectos residenciales y comerciales de principio a fin.", "/proyectos?categoria=arquitectura"),
    ("Interiorismo", "Espacios interiores pensados para quien los habita.", "/proyectos?categoria=interiorismo"),
    ("Remodelación", "Nueva vida para construcciones existentes.", "/proyectos?categoria=remodelacion"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Preloader/>
        <section class="hero">
            <h1>"Despacho de Arquitectura"</h1>
            <p class="hero__tagline">"Diseñamos espacios con propósito."</p>
            <A href="/proyectos" attr:class="hero__cta">"Ver proyectos"</A>
        </section>
        <Reveal id="servicios" class="servicios">
            <h2>"Servicios"</h2>
            <div class="servicios__grid">
                {SERVICES
                    .iter()
                    .map(|(title, blurb, href)| {
                        view! {
                            <a class="servicio" href=*href>
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
        <Reveal id="nosotros" class="nosotros">
            <h2>"Nosotros"</h2>
            <p>
                "Somos un equipo de arquitectos e interioristas que acompaña cada proyecto desde el primer trazo hasta la entrega."
            </p>
        </Reveal>
        <Reveal id="contacto-cta" class="contacto-cta">
            <h2>"¿Tienes un proyecto en mente?"</h2>
            <A href="/contacto" attr:class="contacto-cta__link">"Escríbenos"</A>
        </Reveal>
    }
}
