//! Entrance animations for gallery cards and page sections.
//!
//! Cards already on screen when a render mounts are revealed on a stagger;
//! the rest wait for an `IntersectionObserver` and reveal the first time they
//! scroll in. The actual motion lives in CSS (`.is-revealed`, `.is-visible`);
//! this module only decides *when* the class is added.
//!
//! Pending stagger timeouts and card observers are render-scoped and are torn
//! down by [`reset_pending`], which the gallery calls before every re-render.
//! Section observers belong to the `Reveal` component that created them.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of the viewport height a card's top must be above to count as on-screen.
pub const VIEWPORT_REVEAL_RATIO: f64 = 0.95;
/// Observer threshold for cards below the fold.
pub const CARD_OBSERVER_THRESHOLD: f64 = 0.2;
/// Observer threshold for `Reveal` page sections.
pub const SECTION_OBSERVER_THRESHOLD: f64 = 0.1;
/// Delay between consecutive on-screen card reveals. Zero disables the stagger.
pub const REVEAL_STAGGER_MS: u32 = 200;

/// Whether a card spanning `top..bottom` (client px) counts as on-screen.
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height * VIEWPORT_REVEAL_RATIO && bottom > 0.0
}

/// Delay for the `slot`-th on-screen card of a render.
pub fn stagger_delay_ms(slot: usize, stagger_ms: u32) -> u32 {
    u32::try_from(slot)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{REVEAL_STAGGER_MS, in_viewport, stagger_delay_ms};
    use crate::util::timers::TimerRegistry;

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// An observer that fires its callback once, disconnected on drop.
    pub struct OnceObserver {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl Drop for OnceObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    thread_local! {
        static PENDING_TIMERS: RefCell<TimerRegistry<Timeout>> = RefCell::new(TimerRegistry::default());
        static CARD_OBSERVERS: RefCell<Vec<OnceObserver>> = const { RefCell::new(Vec::new()) };
        static STAGGER_SLOT: Cell<usize> = const { Cell::new(0) };
    }

    pub fn reset_pending() -> usize {
        STAGGER_SLOT.with(|slot| slot.set(0));
        CARD_OBSERVERS.with(|observers| observers.borrow_mut().clear());
        PENDING_TIMERS.with(|timers| timers.borrow_mut().clear())
    }

    pub fn element_in_viewport(el: &Element) -> bool {
        let rect = el.get_bounding_client_rect();
        in_viewport(rect.top(), rect.bottom(), viewport_height())
    }

    fn viewport_height() -> f64 {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .or_else(|| {
                window
                    .document()
                    .and_then(|doc| doc.document_element())
                    .map(|root| f64::from(root.client_height()))
            })
            .unwrap_or(0.0)
    }

    pub fn schedule_staggered(reveal: impl FnOnce() + 'static) {
        let slot = STAGGER_SLOT.with(|s| {
            let current = s.get();
            s.set(current + 1);
            current
        });
        let delay = stagger_delay_ms(slot, REVEAL_STAGGER_MS);
        let timeout = Timeout::new(delay, reveal);
        PENDING_TIMERS.with(|timers| timers.borrow_mut().push(timeout));
    }

    fn observe_once(el: &Element, threshold: f64, on_visible: impl FnOnce() + 'static) -> Option<OnceObserver> {
        let mut on_visible = Some(on_visible);
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Some(reveal) = on_visible.take() {
                        reveal();
                    }
                    observer.unobserve(&entry.target());
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {err:?}");
                return None;
            }
        };
        observer.observe(el);
        Some(OnceObserver { observer, _callback: callback })
    }

    pub fn observe_card(el: &Element, threshold: f64, reveal: impl FnOnce() + 'static) {
        match observe_once(el, threshold, reveal) {
            Some(observer) => CARD_OBSERVERS.with(|observers| observers.borrow_mut().push(observer)),
            None => log::debug!("card left unobserved"),
        }
    }

    /// Like `observe_card`, but the caller owns the observer, so it survives
    /// gallery resets and is disconnected when the caller drops it.
    pub fn observe_section(el: &Element, threshold: f64, reveal: impl FnOnce() + 'static) -> Option<OnceObserver> {
        observe_once(el, threshold, reveal)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{OnceObserver, element_in_viewport, observe_card, observe_section, schedule_staggered};

/// Cancel pending stagger timers and disconnect card observers.
///
/// Returns how many timers were still pending.
pub fn reset_pending() -> usize {
    #[cfg(feature = "hydrate")]
    {
        browser::reset_pending()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
