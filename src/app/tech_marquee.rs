use leptos::prelude::*;

use crate::content::{LinkItem, TECHNOLOGIES};

/// Two endless rows of technology badges scrolling in opposite directions.
#[component]
pub fn TechMarquee() -> impl IntoView {
    // the list is doubled so the CSS loop has no visible seam
    let forward = TECHNOLOGIES
        .iter()
        .chain(TECHNOLOGIES.iter())
        .copied()
        .collect::<Vec<_>>();
    let backward = forward.iter().rev().copied().collect::<Vec<_>>();

    view! {
        <section class="relative py-20 overflow-hidden">
            <div class="text-center mb-12">
                <p class="text-sm text-lime uppercase tracking-widest mb-2">"Tech Stack"</p>
                <h2 class="text-2xl md:text-3xl font-bold text-white">"Technologies I Work With"</h2>
            </div>
            <MarqueeRow items=forward track_class="flex orbit-track" />
            <div class="mt-6">
                <MarqueeRow items=backward track_class="flex orbit-track-reverse" />
            </div>
        </section>
    }
}

#[component]
fn MarqueeRow(items: Vec<LinkItem>, track_class: &'static str) -> impl IntoView {
    view! {
        <div class="relative">
            <div class="absolute left-0 top-0 bottom-0 w-32 bg-gradient-to-r from-ink to-transparent z-10 pointer-events-none" />
            <div class="absolute right-0 top-0 bottom-0 w-32 bg-gradient-to-l from-ink to-transparent z-10 pointer-events-none" />
            <div class=track_class style="width: fit-content">
                {items
                    .into_iter()
                    .map(|tech| {
                        view! {
                            <div class="flex items-center gap-3 mx-6 px-6 py-4 rounded-xl bg-panel border border-edge hover:border-lime/50 transition-all duration-300 group cursor-pointer hover:scale-105">
                                <div class="w-10 h-10 rounded-lg bg-ink flex items-center justify-center group-hover:bg-lime/10 transition-colors">
                                    <i class=format!("{} text-gray-400 group-hover:text-lime transition-colors", tech.icon) />
                                </div>
                                <span class="text-sm font-medium text-gray-300 group-hover:text-white transition-colors whitespace-nowrap">
                                    {tech.label}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
