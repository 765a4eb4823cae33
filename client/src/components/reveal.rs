//! Section wrapper that fades its content in on first scroll into view.

use leptos::prelude::*;

#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] id: String,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::reveal::{OnceObserver, SECTION_OBSERVER_THRESHOLD, observe_section};
        use crate::util::timers::ObserverSlot;

        let observer = StoredValue::new_local(ObserverSlot::<OnceObserver>::default());

        Effect::new(move || {
            let Some(el) = section_ref.get() else {
                return;
            };
            if visible.get_untracked() || !observer.with_value(ObserverSlot::needs_observer) {
                return;
            }
            let created = observe_section(&el, SECTION_OBSERVER_THRESHOLD, move || {
                let _ = visible.try_set(true);
            });
            observer.update_value(|slot| slot.arm(created));
        });

        // Disconnect once fired. Runs after the observer callback has returned.
        Effect::new(move || {
            if visible.get() {
                let _ = observer.try_update_value(ObserverSlot::fire);
            }
        });

        on_cleanup(move || {
            let _ = observer.try_update_value(ObserverSlot::release);
        });
    }

    let class = if class.is_empty() {
        "animate-on-scroll".to_owned()
    } else {
        format!("animate-on-scroll {class}")
    };
    let id = (!id.is_empty()).then_some(id);

    view! {
        <section node_ref=section_ref id=id class=class class:is-visible=move || visible.get()>
            {children()}
        </section>
    }
}
