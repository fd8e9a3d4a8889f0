use leptos::{html, prelude::*};

use crate::{
    content::{Project, PROJECTS},
    sections::SectionId,
};

use super::reveal::{rise, stagger, use_reveal, DEFAULT_THRESHOLD};

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, DEFAULT_THRESHOLD);
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <section id=SectionId::Projects.anchor() node_ref=section_ref class="relative py-24 lg:py-32">
            <div class="section-container max-w-7xl mx-auto">
                <div class=move || format!("text-center mb-16 transition-all duration-1000 {}", rise(revealed.get()))>
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-lime/10 border border-lime/30 mb-4">
                        <i class="extra-sparkles text-lime" />
                        <span class="text-xs text-lime uppercase tracking-wider">"Featured Work"</span>
                    </div>
                    <h2 class="text-4xl lg:text-5xl font-bold text-white">
                        "Selected " <span class="gradient-text">"Projects"</span>
                    </h2>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <ProjectCard
                                    project=*project
                                    index=index
                                    revealed=revealed
                                    hovered=Signal::derive(move || hovered.get() == Some(index))
                                    on_hover=move |over| set_hovered.set(over.then_some(index))
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || format!("text-center mt-12 transition-all duration-1000 delay-500 {}", rise(revealed.get()))>
                    <button class="inline-flex items-center gap-2 px-8 py-4 border border-edge text-white font-semibold rounded-lg hover:border-lime hover:bg-lime/5 transition-all duration-300 group">
                        "View All Projects"
                        <i class="extra-arrow-up-right group-hover:translate-x-1 group-hover:-translate-y-1 transition-transform" />
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    index: usize,
    #[prop(into)] revealed: Signal<bool>,
    hovered: Signal<bool>,
    on_hover: impl Fn(bool) + Send + Sync + Copy + 'static,
) -> impl IntoView {
    view! {
        <div
            class=move || format!("group relative transition-all duration-700 {}", rise(revealed.get()))
            style=stagger(index, 0.15)
            on:mouseenter=move |_| on_hover(true)
            on:mouseleave=move |_| on_hover(false)
        >
            <div class="relative h-full rounded-2xl overflow-hidden bg-panel border border-edge hover:border-lime/50 transition-all duration-500 hover:shadow-[0_0_40px_rgba(209,226,157,0.1)]">
                <div class="relative h-48 overflow-hidden">
                    <div class=move || {
                        let zoom = if hovered.get() { "scale-110" } else { "scale-100" };
                        format!(
                            "absolute inset-0 bg-gradient-to-br {} transition-transform duration-700 {zoom}",
                            project.backdrop.gradient_class(),
                        )
                    } />
                    <div class=move || {
                        let fade = if hovered.get() { "opacity-100" } else { "opacity-0" };
                        format!("absolute inset-0 bg-ink/80 flex items-center justify-center gap-4 transition-opacity duration-300 {fade}")
                    }>
                        <a
                            href=project.demo_href
                            class="w-12 h-12 rounded-full bg-lime flex items-center justify-center hover:scale-110 transition-transform"
                            aria-label="Live demo"
                        >
                            <i class="extra-external-link text-ink" />
                        </a>
                        <a
                            href=project.source_href
                            class="w-12 h-12 rounded-full bg-white flex items-center justify-center hover:scale-110 transition-transform"
                            aria-label="Source code"
                        >
                            <i class="extra-github text-ink" />
                        </a>
                    </div>
                    <div class="absolute bottom-4 left-4 right-4 flex justify-between">
                        {project
                            .metrics
                            .iter()
                            .map(|metric| {
                                view! {
                                    <div class="glass rounded-lg px-2 py-1 text-center">
                                        <div class="text-xs font-bold text-lime">{metric.value}</div>
                                        <div class="text-[10px] text-gray-400">{metric.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="p-6">
                    <h3 class="text-xl font-bold text-white mb-1 group-hover:text-lime transition-colors">
                        {project.title}
                    </h3>
                    <p class="text-sm text-lime/80 mb-3">{project.subtitle}</p>
                    <p class="text-sm text-gray-400 mb-4 line-clamp-3">{project.description}</p>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-2 py-1 text-xs rounded-md bg-ink text-gray-400 border border-edge">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
