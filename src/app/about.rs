use leptos::{html, prelude::*};

use crate::{content::HIGHLIGHTS, sections::SectionId};

use super::{
    counter::AnimatedCounter,
    reveal::{from_left, from_right, stagger, use_reveal},
};

const ABOUT_THRESHOLD: f64 = 0.2;
const COUNT_UP_MS: u64 = 2000;

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, ABOUT_THRESHOLD);

    view! {
        <section id=SectionId::About.anchor() node_ref=section_ref class="relative py-24 lg:py-32">
            <div class="section-container max-w-7xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class=move || format!("relative transition-all duration-1000 {}", from_left(revealed.get()))>
                        <div class="relative aspect-square max-w-lg mx-auto">
                            <div class="absolute inset-0 bg-lime/10 rounded-full blur-[100px]" />
                            <div class="absolute inset-4 rounded-full border border-edge/50" />
                            <div class="absolute inset-8 rounded-full border border-dashed border-lime/30 animate-spin-slow" />
                            <div class="absolute inset-0 flex items-center justify-center">
                                <div class="w-32 h-32 rounded-full bg-panel border border-lime/50 flex items-center justify-center pulse-glow">
                                    <span class="text-4xl font-bold gradient-text">"DE"</span>
                                </div>
                            </div>

                            <StatBubble class="top-0 right-0" label="Years Exp">
                                <AnimatedCounter target=5 duration_ms=COUNT_UP_MS start=revealed suffix="+" />
                            </StatBubble>
                            <StatBubble class="bottom-0 left-0 [animation-delay:1s]" label="Projects">
                                <AnimatedCounter target=50 duration_ms=COUNT_UP_MS start=revealed suffix="+" />
                            </StatBubble>
                            <StatBubble class="top-1/2 -left-4 [animation-delay:2s]" label="Uptime">
                                <AnimatedCounter target=99 duration_ms=COUNT_UP_MS start=revealed suffix=".9%" />
                            </StatBubble>
                        </div>
                    </div>

                    <div class=move || format!("space-y-8 transition-all duration-1000 delay-200 {}", from_right(revealed.get()))>
                        <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-lime/10 border border-lime/30">
                            <span class="w-2 h-2 rounded-full bg-lime animate-pulse" />
                            <span class="text-xs text-lime uppercase tracking-wider">"About Me"</span>
                        </div>
                        <h2 class="text-4xl lg:text-5xl font-bold text-white leading-tight">
                            "Behind the " <span class="gradient-text">"Data"</span>
                        </h2>
                        <div class="space-y-4 text-gray-400 leading-relaxed">
                            <p>
                                "My journey began with a curiosity for patterns: how raw, unstructured information could be transformed into meaningful insights that drive decisions. Starting as a Software Engineer, I built a strong foundation in coding and system architecture."
                            </p>
                            <p>
                                "Transitioning to Data Analysis, I discovered my passion for uncovering stories hidden in numbers. Today, as a Data Engineer, I combine both worlds, building robust pipelines that transform data at scale while ensuring it tells the right story."
                            </p>
                            <p>
                                "I specialize in cloud-native data architectures, real-time streaming, and building data platforms that empower organizations to make data-driven decisions."
                            </p>
                        </div>
                        <div class="grid sm:grid-cols-2 gap-4 pt-4">
                            {HIGHLIGHTS
                                .iter()
                                .enumerate()
                                .map(|(i, item)| {
                                    view! {
                                        <div
                                            class="group p-4 rounded-xl bg-panel border border-edge hover:border-lime/50 transition-all duration-300 hover:scale-[1.02]"
                                            style=stagger(i, 0.1)
                                        >
                                            <div class="flex items-start gap-3">
                                                <div class="w-10 h-10 rounded-lg bg-lime/10 flex items-center justify-center flex-shrink-0 group-hover:bg-lime/20 transition-colors">
                                                    <i class=format!("{} text-lime", item.icon) />
                                                </div>
                                                <div>
                                                    <h3 class="text-sm font-semibold text-white mb-1">{item.title}</h3>
                                                    <p class="text-xs text-gray-500">{item.description}</p>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatBubble(class: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("absolute glass rounded-xl p-4 floating {class}")>
            <div class="text-2xl font-bold text-lime">{children()}</div>
            <div class="text-xs text-gray-400">{label}</div>
        </div>
    }
}
