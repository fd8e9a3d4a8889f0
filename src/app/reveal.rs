use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::RevealState;

/// Intersection ratio at which most sections reveal.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// One-shot reveal signal for a section element.
///
/// The observer disconnects itself once the section has been revealed. If
/// the element never mounts the signal simply stays false.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let state = StoredValue::new(RevealState::new(threshold));

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let flipped = entries
                .iter()
                .filter(|entry| entry.is_intersecting())
                .any(|entry| {
                    state
                        .try_update_value(|s| s.observe(entry.intersection_ratio()))
                        .unwrap_or(false)
                });
            if flipped {
                observer.disconnect();
                // the section may already be gone
                set_revealed.try_set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![state.get_value().threshold()]),
    );

    revealed
}

/// Fade up from below.
pub fn rise(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    }
}

/// Fade in from the left.
pub fn from_left(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-x-0"
    } else {
        "opacity-0 -translate-x-10"
    }
}

/// Fade in from the right.
pub fn from_right(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-x-0"
    } else {
        "opacity-0 translate-x-10"
    }
}

/// Inline style staggering a transition by `index * step` seconds.
pub fn stagger(index: usize, step: f64) -> String {
    format!("transition-delay: {}s", index as f64 * step)
}
