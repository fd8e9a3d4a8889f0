use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::sections::{SectionId, SectionTracker, NAV_SOLID_AFTER};

use super::scroll::{measure_sections, scroll_to_section};

#[component]
pub fn Navigation() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let tracker = StoredValue::new(SectionTracker::default());
    let (active, set_active) = signal(SectionId::Home);
    let (menu_open, set_menu_open) = signal(false);

    Effect::new(move |_| {
        let y = scroll_y.get();
        let extents = measure_sections();
        if let Some(next) = tracker.try_update_value(|t| t.update(y, &extents)) {
            if active.get_untracked() != next {
                set_active.set(next);
            }
        }
    });

    let go_to = move |id: SectionId| {
        if scroll_to_section(id) {
            set_menu_open.set(false);
        }
    };

    let nav_class = move || {
        let base = "fixed top-0 left-0 right-0 z-50 transition-all duration-500";
        if scroll_y.get() > NAV_SOLID_AFTER {
            format!("{base} bg-ink/80 backdrop-blur-xl border-b border-edge/50")
        } else {
            format!("{base} bg-transparent")
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 md:h-20">
                    <button class="flex items-center gap-2 group" on:click=move |_| go_to(SectionId::Home)>
                        <div class="relative w-10 h-10 flex items-center justify-center rounded-lg bg-panel border border-edge group-hover:border-lime transition-colors duration-300">
                            <i class="extra-database text-lime" />
                        </div>
                        <span class="text-lg font-semibold text-white hidden sm:block">"Portfolio"</span>
                    </button>

                    <div class="hidden md:flex items-center gap-1">
                        {SectionId::ALL
                            .into_iter()
                            .map(|id| {
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == id {
                                                "relative px-4 py-2 text-sm font-medium rounded-lg transition-all duration-300 text-lime"
                                            } else {
                                                "relative px-4 py-2 text-sm font-medium rounded-lg transition-all duration-300 text-gray-400 hover:text-white"
                                            }
                                        }
                                        on:click=move |_| go_to(id)
                                    >
                                        {id.label()}
                                        <Show when=move || active.get() == id>
                                            <span class="absolute bottom-0 left-1/2 -translate-x-1/2 w-1 h-1 rounded-full bg-lime" />
                                        </Show>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        class="hidden md:flex items-center gap-2 px-5 py-2.5 bg-lime text-ink text-sm font-semibold rounded-lg hover:bg-lime-dim transition-all duration-300"
                        on:click=move |_| go_to(SectionId::Contact)
                    >
                        "Let's Talk"
                    </button>

                    <button
                        class="md:hidden relative w-10 h-10 flex items-center justify-center rounded-lg bg-panel border border-edge"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <i class=move || if menu_open.get() { "extra-close" } else { "extra-menu" } />
                    </button>
                </div>
            </div>

            <div class=move || {
                if menu_open.get() {
                    "md:hidden absolute top-full left-0 right-0 bg-ink/95 backdrop-blur-xl border-b border-edge/50 transition-all duration-300 opacity-100 translate-y-0"
                } else {
                    "md:hidden absolute top-full left-0 right-0 bg-ink/95 backdrop-blur-xl border-b border-edge/50 transition-all duration-300 opacity-0 -translate-y-4 pointer-events-none"
                }
            }>
                <div class="px-4 py-6 space-y-2">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == id {
                                            "block w-full text-left px-4 py-3 text-base font-medium rounded-lg bg-lime/10 text-lime"
                                        } else {
                                            "block w-full text-left px-4 py-3 text-base font-medium rounded-lg text-gray-400 hover:text-white hover:bg-panel"
                                        }
                                    }
                                    on:click=move |_| go_to(id)
                                >
                                    {id.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="w-full mt-4 px-5 py-3 bg-lime text-ink text-base font-semibold rounded-lg"
                        on:click=move |_| go_to(SectionId::Contact)
                    >
                        "Let's Talk"
                    </button>
                </div>
            </div>
        </nav>
    }
}
