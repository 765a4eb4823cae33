//! Contact page with the inquiry form.
//!
//! Validation and outcome mapping are plain functions so the messages can be
//! tested without a browser; the component only wires them to signals.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::net::types::{ContactError, ContactReply, ContactRequest};
use crate::util::site_config::SiteConfig;

pub const CONTACT_INCOMPLETE: &str = "Por favor completa todos los campos.";
pub const CONTACT_CONNECTION_ERROR: &str = "Ocurrió un error de conexión. Intenta de nuevo más tarde.";
pub const CONTACT_SENT: &str = "¡Mensaje enviado con éxito! Nos pondremos en contacto contigo pronto.";
pub const CONTACT_REJECTED: &str = "Error al enviar. Intenta de nuevo más tarde.";

const SUBMIT_LABEL: &str = "Enviar mensaje";
const SUBMIT_BUSY_LABEL: &str = "Enviando...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "form-feedback form-feedback--success",
            Self::Error => "form-feedback form-feedback--error",
        }
    }
}

/// Inline message under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    fn error(text: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Error, text: text.into() }
    }
}

/// Trim the fields and build the request body.
///
/// # Errors
///
/// Returns the incomplete-form message when name, email or message is blank.
/// The honeypot may be blank.
pub fn validate_contact(nombre: &str, correo: &str, mensaje: &str, hp: &str) -> Result<ContactRequest, &'static str> {
    let (nombre, correo, mensaje) = (nombre.trim(), correo.trim(), mensaje.trim());
    if nombre.is_empty() || correo.is_empty() || mensaje.is_empty() {
        return Err(CONTACT_INCOMPLETE);
    }
    Ok(ContactRequest {
        nombre: nombre.to_owned(),
        correo: correo.to_owned(),
        mensaje: mensaje.to_owned(),
        hp: hp.trim().to_owned(),
    })
}

/// Message for a finished submission.
pub fn feedback_for(result: &Result<ContactReply, ContactError>) -> Feedback {
    match result {
        Ok(reply) if reply.accepted() => Feedback { kind: FeedbackKind::Success, text: CONTACT_SENT.to_owned() },
        Ok(reply) => Feedback::error(reply.reason().unwrap_or(CONTACT_REJECTED)),
        Err(_) => Feedback::error(CONTACT_CONNECTION_ERROR),
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let nombre = RwSignal::new(String::new());
    let correo = RwSignal::new(String::new());
    let mensaje = RwSignal::new(String::new());
    let hp = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_contact(&nombre.get(), &correo.get(), &mensaje.get(), &hp.get()) {
            Ok(request) => request,
            Err(message) => {
                feedback.set(Some(Feedback::error(message)));
                return;
            }
        };
        busy.set(true);
        feedback.set(None);

        #[cfg(feature = "hydrate")]
        {
            let site = site.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_contact(&site, &request).await;
                if let Err(e) = &result {
                    log::error!("contact submit failed: {e}");
                }
                let outcome = feedback_for(&result);
                if outcome.kind == FeedbackKind::Success {
                    for field in [nombre, correo, mensaje, hp] {
                        let _ = field.try_set(String::new());
                    }
                }
                let _ = feedback.try_set(Some(outcome));
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&site, request);
    };

    view! {
        <section class="contacto">
            <h2>"Contacto"</h2>
            <p class="contacto__intro">"Cuéntanos sobre tu proyecto y te responderemos a la brevedad."</p>
            <form id="contact-form" class="contact-form" on:submit=on_submit novalidate=true>
                <label for="nombre">"Nombre"</label>
                <input
                    id="nombre"
                    name="nombre"
                    type="text"
                    prop:value=move || nombre.get()
                    on:input=move |ev| nombre.set(event_target_value(&ev))
                />
                <label for="correo">"Correo"</label>
                <input
                    id="correo"
                    name="correo"
                    type="email"
                    prop:value=move || correo.get()
                    on:input=move |ev| correo.set(event_target_value(&ev))
                />
                <label for="mensaje">"Mensaje"</label>
                <textarea
                    id="mensaje"
                    name="mensaje"
                    rows="6"
                    prop:value=move || mensaje.get()
                    on:input=move |ev| mensaje.set(event_target_value(&ev))
                ></textarea>
                <input
                    class="contact-form__hp"
                    name="hp"
                    type="text"
                    tabindex="-1"
                    autocomplete="off"
                    aria-hidden="true"
                    prop:value=move || hp.get()
                    on:input=move |ev| hp.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL }}
                </button>
            </form>
            {move || feedback.get().map(|f| view! { <p class=f.kind.class()>{f.text}</p> })}
        </section>
    }
}
