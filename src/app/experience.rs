use leptos::{html, prelude::*};

use crate::{
    content::{TimelineEntry, EXPERIENCE},
    sections::SectionId,
};

use super::reveal::{rise, stagger, use_reveal, DEFAULT_THRESHOLD};

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, DEFAULT_THRESHOLD);
    let (active_index, set_active_index) = signal(0usize);

    view! {
        <section id=SectionId::Experience.anchor() node_ref=section_ref class="relative py-24 lg:py-32">
            <div class="section-container max-w-7xl mx-auto">
                <div class=move || format!("text-center mb-16 transition-all duration-1000 {}", rise(revealed.get()))>
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-lime/10 border border-lime/30 mb-4">
                        <i class="extra-briefcase text-lime" />
                        <span class="text-xs text-lime uppercase tracking-wider">"Career Journey"</span>
                    </div>
                    <h2 class="text-4xl lg:text-5xl font-bold text-white">
                        "Professional " <span class="gradient-text">"Experience"</span>
                    </h2>
                </div>

                <div class="relative">
                    <div class="absolute left-8 lg:left-1/2 top-0 bottom-0 w-px bg-edge lg:-translate-x-1/2">
                        <div
                            class="absolute top-0 left-0 w-full bg-gradient-to-b from-lime to-lime/0 transition-all duration-[2000ms] ease-out"
                            style=move || format!("height: {}", if revealed.get() { "100%" } else { "0%" })
                        />
                    </div>

                    <div class="space-y-12">
                        {EXPERIENCE
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! {
                                    <TimelineCard
                                        entry=*entry
                                        index=index
                                        revealed=revealed
                                        active=Signal::derive(move || active_index.get() == index)
                                        on_enter=move || set_active_index.set(index)
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineCard(
    entry: TimelineEntry,
    index: usize,
    #[prop(into)] revealed: Signal<bool>,
    active: Signal<bool>,
    on_enter: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    // cards alternate sides of the line on wide screens
    let even = index % 2 == 0;
    let row = if even { "lg:flex-row" } else { "lg:flex-row-reverse" };
    let text_align = if even { "lg:text-right lg:pr-16" } else { "lg:pl-16" };

    view! {
        <div
            class=move || format!(
                "relative flex flex-col {row} items-start gap-8 transition-all duration-700 {}",
                rise(revealed.get()),
            )
            style=stagger(index, 0.2)
            on:mouseenter=move |_| on_enter()
        >
            <div class=move || {
                let ring = if active.get() {
                    "bg-lime scale-125 shadow-[0_0_20px_rgba(209,226,157,0.6)]"
                } else {
                    "bg-panel border-2 border-edge"
                };
                format!("absolute left-8 lg:left-1/2 w-4 h-4 rounded-full -translate-x-1/2 z-10 transition-all duration-300 {ring}")
            } />

            <div class=format!("w-full lg:w-1/2 pl-16 lg:pl-0 {text_align}")>
                <div class=move || {
                    let border = if active.get() {
                        "border-lime/50 shadow-[0_0_30px_rgba(209,226,157,0.1)]"
                    } else {
                        "border-edge hover:border-edge/80"
                    };
                    format!("group p-6 rounded-2xl bg-panel border transition-all duration-300 {border}")
                }>
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-ink text-xs text-gray-400 mb-4">
                        <i class="extra-calendar" />
                        {entry.period}
                    </div>
                    <h3 class="text-xl font-bold text-white mb-1">{entry.role}</h3>
                    <div class="flex items-center gap-2 text-lime mb-2">
                        <i class="extra-briefcase" />
                        <span class="font-medium">{entry.organization}</span>
                    </div>
                    <div class="flex items-center gap-2 text-gray-500 text-sm mb-4">
                        <i class="extra-map-pin" />
                        <span>{entry.location}</span>
                    </div>
                    <p class="text-gray-400 text-sm mb-4">{entry.description}</p>
                    <ul class="space-y-2 mb-4">
                        {entry
                            .achievements
                            .iter()
                            .map(|achievement| {
                                view! {
                                    <li class="flex items-start gap-2 text-sm text-gray-300">
                                        <i class="extra-chevron-right text-lime mt-0.5 flex-shrink-0" />
                                        <span>{*achievement}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="flex flex-wrap gap-2">
                        {entry
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span class="px-2 py-1 text-xs rounded-md bg-ink text-gray-400 border border-edge">
                                        {*skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="hidden lg:block lg:w-1/2" />
        </div>
    }
}
