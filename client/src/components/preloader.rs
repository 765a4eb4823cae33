//! Splash screen played once on the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `util::preloader` describes the choreography; this component plays it.
//! One async driver walks the steps against a fixed start time, a second one
//! forces completion after `FALLBACK_MS`. Whichever reaches `hide` first wins
//! and the other becomes a no-op.

use leptos::prelude::*;

use crate::util::preloader::PreloaderPhase;

/// Class set on `<body>` while the splash covers the page.
pub const BODY_ACTIVE_CLASS: &str = "preloader-active";

#[component]
pub fn Preloader() -> impl IntoView {
    let phase = RwSignal::new(PreloaderPhase::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::preloader::{
            FALLBACK_MS, MIN_DISPLAY_MS, SEQUENCE, remaining_min_display, step_offsets,
            total_duration_ms,
        };

        set_body_active(true);
        let mounted_at = js_sys::Date::now();

        leptos::task::spawn_local(async move {
            sleep_ms(remaining_min_display(since(mounted_at))).await;
            let started = js_sys::Date::now();
            for (offset, state) in step_offsets(SEQUENCE) {
                sleep_ms(offset.saturating_sub(since(started))).await;
                if phase.with_untracked(|p| p.is_done()) {
                    return;
                }
                phase.set(PreloaderPhase::Playing(state));
            }
            sleep_ms(total_duration_ms(SEQUENCE).saturating_sub(since(started))).await;
            finish(phase).await;
        });

        leptos::task::spawn_local(async move {
            sleep_ms(FALLBACK_MS).await;
            if phase.with_untracked(|p| !p.is_done()) {
                log::warn!("preloader fallback after {FALLBACK_MS}ms (min display {MIN_DISPLAY_MS}ms)");
            }
            finish(phase).await;
        });
    }

    view! {
        <Show when=move || phase.get() != PreloaderPhase::Removed>
            <div id="preloader" class=move || phase.get().class() aria-hidden="true">
                <div class="preloader-logo">
                    <span class="logo-half logo-half--left"></span>
                    <span class="logo-half logo-half--right"></span>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn since(start: f64) -> u32 {
    crate::util::preloader::elapsed_ms(start, js_sys::Date::now())
}

#[cfg(feature = "hydrate")]
async fn sleep_ms(ms: u32) {
    if ms > 0 {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}

/// Hide the splash, then drop it from the DOM. Runs at most once.
#[cfg(feature = "hydrate")]
async fn finish(phase: RwSignal<PreloaderPhase>) {
    use crate::util::preloader::REMOVE_DELAY_MS;

    let hid = phase.try_update(PreloaderPhase::hide).unwrap_or(false);
    if !hid {
        return;
    }
    set_body_active(false);
    sleep_ms(REMOVE_DELAY_MS).await;
    let _ = phase.try_set(PreloaderPhase::Removed);
}

#[cfg(feature = "hydrate")]
fn set_body_active(active: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let _ = body.class_list().toggle_with_force(BODY_ACTIVE_CLASS, active);
}
