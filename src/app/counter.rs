use leptos::prelude::*;
use leptos_use::{use_interval_fn_with_options, UseIntervalFnOptions};

use crate::motion::CounterAnimation;

/// A number that eases up to `target` once `start` turns true.
///
/// Each counter owns its interval; it is paused when the count finishes and
/// released when the component unmounts. Repeated starts are ignored.
#[component]
pub fn AnimatedCounter(
    target: u32,
    duration_ms: u64,
    #[prop(into)] start: Signal<bool>,
    #[prop(optional)] suffix: &'static str,
) -> impl IntoView {
    let animation = StoredValue::new(CounterAnimation::new(target, duration_ms));
    let (value, set_value) = signal(0u32);
    let (finished, set_finished) = signal(false);

    let timer = use_interval_fn_with_options(
        move || match animation.try_update_value(|a| a.tick()).flatten() {
            Some(v) => {
                set_value.try_set(v);
            }
            None => {
                set_finished.try_set(true);
            }
        },
        animation.get_value().interval_ms(),
        UseIntervalFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if finished.get() {
            (timer.pause)();
        } else if start.get() && animation.try_update_value(|a| a.start()).unwrap_or(false) {
            (timer.resume)();
        }
    });

    view! {
        <span>{value}{suffix}</span>
    }
}
