use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::{
    content::{CAREER_PATH, HERO_STATS, OWNER_NAME, OWNER_TITLE},
    motion::{Typewriter, TYPEWRITER_INTERVAL_MS},
    sections::SectionId,
};

use super::{
    reveal::{from_right, rise},
    scroll::scroll_to_section,
};

const CARD_REST: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)";

#[component]
pub fn Hero() -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let (typed, set_typed) = signal("");
    let typewriter = StoredValue::new(Typewriter::new(OWNER_TITLE));
    let card_ref = NodeRef::<html::Div>::new();
    let (card_transform, set_card_transform) = signal(CARD_REST.to_string());

    // the hero is on screen at load, so it reveals as soon as it mounts
    Effect::new(move |_| set_visible.set(true));

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            if let Some(prefix) = typewriter.try_update_value(|t| t.tick()).flatten() {
                set_typed.try_set(prefix);
            }
        },
        TYPEWRITER_INTERVAL_MS,
    );
    Effect::new(move |_| {
        typed.track();
        if typewriter.try_with_value(|t| t.is_done()).unwrap_or(true) {
            pause();
        }
    });

    let tilt = move |ev: MouseEvent| {
        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let x = f64::from(ev.client_x()) - rect.left();
        let y = f64::from(ev.client_y()) - rect.top();
        let rotate_x = (y - rect.height() / 2.0) / 20.0;
        let rotate_y = (rect.width() / 2.0 - x) / 20.0;
        set_card_transform.set(format!(
            "perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) scale(1.02)"
        ));
    };

    view! {
        <section
            id=SectionId::Home.anchor()
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20"
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-lime/10 rounded-full blur-[120px] animate-pulse" />
                <div class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-lime/5 rounded-full blur-[100px] animate-pulse" />
            </div>

            <div class="section-container max-w-7xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-8 items-center">
                    <div class=move || format!("space-y-8 transition-all duration-1000 {}", rise(visible.get()))>
                        <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-panel border border-edge">
                            <i class="extra-sparkles text-lime" />
                            <span class="text-sm text-gray-300">"Welcome to my portfolio"</span>
                        </div>

                        <div class="space-y-4">
                            <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-white leading-tight">
                                "Hello, I'm "
                                <span class="block mt-2 gradient-text glow-text">{OWNER_NAME}</span>
                            </h1>
                            <div class="flex items-center gap-3 text-2xl sm:text-3xl lg:text-4xl">
                                <span class="text-gray-400">"I'm a"</span>
                                <span class="text-lime font-semibold cursor-blink">{typed}</span>
                            </div>
                        </div>

                        <p class="text-lg text-gray-400 max-w-xl leading-relaxed">
                            "Transforming raw data into strategic assets. I architect pipelines, optimize warehouses, and visualize the invisible patterns that drive business growth."
                        </p>

                        <div class="flex flex-wrap gap-3">
                            {CAREER_PATH
                                .iter()
                                .map(|stage| {
                                    view! {
                                        <div class=format!(
                                            "flex items-center gap-2 px-4 py-2 rounded-lg bg-gradient-to-r {} border border-white/10 hover:border-lime/50 transition-all duration-300 hover:scale-105",
                                            stage.gradient,
                                        )>
                                            <i class=format!("{} text-white/80", stage.icon) />
                                            <span class="text-sm text-white/90">{stage.label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex flex-wrap gap-4 pt-4">
                            <button
                                class="btn-primary flex items-center gap-2 group"
                                on:click=move |_| {
                                    scroll_to_section(SectionId::Projects);
                                }
                            >
                                "Explore My Work"
                                <i class="extra-arrow-down group-hover:translate-y-1 transition-transform" />
                            </button>
                            <button
                                class="px-8 py-4 border border-edge text-white font-semibold rounded-lg hover:border-lime hover:bg-lime/5 transition-all duration-300"
                                on:click=move |_| {
                                    scroll_to_section(SectionId::Contact);
                                }
                            >
                                "Get in Touch"
                            </button>
                        </div>

                        <div class="flex gap-8 pt-8 border-t border-edge/50">
                            {HERO_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="space-y-1">
                                            <div class="text-2xl sm:text-3xl font-bold gradient-text">{stat.value}</div>
                                            <div class="text-xs text-gray-500">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class=move || {
                            format!(
                                "relative lg:h-[600px] flex items-center justify-center transition-all duration-1000 delay-300 {}",
                                from_right(visible.get()),
                            )
                        }
                        on:mousemove=tilt
                        on:mouseleave=move |_| set_card_transform.set(CARD_REST.to_string())
                    >
                        <div class="absolute inset-0 flex items-center justify-center">
                            <div class="w-[400px] h-[400px] rounded-full border border-edge/30 animate-spin-slow" />
                            <div class="absolute w-[300px] h-[300px] rounded-full border border-lime/20 animate-spin-reverse" />
                        </div>

                        <div
                            node_ref=card_ref
                            class="hero-card relative w-full max-w-md aspect-[4/5] rounded-2xl overflow-hidden transition-transform duration-300 ease-out"
                            style=move || format!("transform: {}", card_transform.get())
                        >
                            <div class="absolute inset-0 rounded-2xl border-2 border-lime/30 glow-border z-10 pointer-events-none" />
                            <div class="absolute inset-0 bg-gradient-to-br from-[#1a1a2e] via-[#16213e] to-[#0f3460]">
                                <div class="absolute inset-0 flex items-center justify-center">
                                    <div class="w-32 h-32 rounded-full bg-lime/10 flex items-center justify-center pulse-glow">
                                        <i class="extra-database text-6xl text-lime" />
                                    </div>
                                </div>
                                <div class="absolute bottom-0 left-0 right-0 p-6 bg-gradient-to-t from-ink to-transparent">
                                    <div class="glass rounded-xl p-4 space-y-2">
                                        <div class="flex items-center gap-2">
                                            <div class="w-2 h-2 rounded-full bg-lime animate-pulse" />
                                            <span class="text-xs text-lime">"Available for work"</span>
                                        </div>
                                        <p class="text-sm text-gray-300">"Building data solutions that scale"</p>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="absolute -left-4 top-1/4 glass rounded-lg px-3 py-2 floating">
                            <span class="text-xs text-lime">"Python"</span>
                        </div>
                        <div class="absolute -right-4 top-1/3 glass rounded-lg px-3 py-2 floating [animation-delay:1s]">
                            <span class="text-xs text-lime">"SQL"</span>
                        </div>
                        <div class="absolute left-0 bottom-1/4 glass rounded-lg px-3 py-2 floating [animation-delay:2s]">
                            <span class="text-xs text-lime">"AWS"</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2">
                <span class="text-xs text-gray-500">"Scroll to explore"</span>
                <div class="w-6 h-10 rounded-full border-2 border-edge flex justify-center pt-2">
                    <div class="w-1.5 h-3 rounded-full bg-lime animate-bounce" />
                </div>
            </div>
        </section>
    }
}
