use leptos::{html, prelude::*};

use crate::{
    content::{SKILLS, SKILL_STATS},
    sections::SectionId,
    skills::{filter_skills, CategorySelection, SkillItem},
};

use super::{
    constellation::Constellation,
    reveal::{rise, stagger, use_reveal, DEFAULT_THRESHOLD},
};

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, DEFAULT_THRESHOLD);
    let (selection, set_selection) = signal(CategorySelection::All);
    let visible_skills = Memo::new(move |_| filter_skills(SKILLS, selection.get()));

    view! {
        <section id=SectionId::Skills.anchor() node_ref=section_ref class="relative py-24 lg:py-32">
            <div class="section-container max-w-7xl mx-auto">
                <div class=move || format!("text-center mb-12 transition-all duration-1000 {}", rise(revealed.get()))>
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-lime/10 border border-lime/30 mb-4">
                        <i class="extra-cpu text-lime" />
                        <span class="text-xs text-lime uppercase tracking-wider">"Technical Skills"</span>
                    </div>
                    <h2 class="text-4xl lg:text-5xl font-bold text-white">
                        "Skills & " <span class="gradient-text">"Expertise"</span>
                    </h2>
                </div>

                <div class=move || format!("flex flex-wrap justify-center gap-3 mb-12 transition-all duration-1000 delay-200 {}", rise(revealed.get()))>
                    {CategorySelection::options()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if selection.get() == option {
                                            "px-5 py-2.5 rounded-lg text-sm font-medium transition-all duration-300 bg-lime text-ink"
                                        } else {
                                            "px-5 py-2.5 rounded-lg text-sm font-medium transition-all duration-300 bg-panel text-gray-400 border border-edge hover:border-lime/50 hover:text-white"
                                        }
                                    }
                                    on:click=move |_| set_selection.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Constellation active=revealed>
                    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                        <For
                            each=move || visible_skills.get().into_iter().enumerate()
                            key=|(_, skill)| skill.name
                            children=move |(index, skill)| {
                                view! { <SkillCard skill=skill index=index revealed=revealed /> }
                            }
                        />
                    </div>
                </Constellation>

                <div class=move || format!("grid grid-cols-2 md:grid-cols-4 gap-6 mt-16 transition-all duration-1000 delay-500 {}", rise(revealed.get()))>
                    {SKILL_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center p-6 rounded-2xl bg-panel border border-edge">
                                    <div class="text-3xl font-bold gradient-text mb-1">{stat.value}</div>
                                    <div class="text-sm text-gray-500">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: SkillItem, index: usize, #[prop(into)] revealed: Signal<bool>) -> impl IntoView {
    let level = skill.level;

    view! {
        <div
            class=move || format!(
                "skill-card group p-5 rounded-xl bg-panel border border-edge hover:border-lime/50 transition-all duration-500 hover:scale-105 {}",
                rise(revealed.get()),
            )
            style=stagger(index, 0.05)
        >
            <div class="flex items-center gap-3 mb-4">
                <div class="w-10 h-10 rounded-lg bg-lime/10 flex items-center justify-center group-hover:bg-lime/20 transition-colors">
                    <i class=format!("{} text-lime", skill.icon) />
                </div>
                <div class="flex-1">
                    <h3 class="text-sm font-semibold text-white">{skill.name}</h3>
                    <span class="text-xs text-gray-500">{skill.category.label()}</span>
                </div>
                <span class="text-sm font-bold text-lime">{level} "%"</span>
            </div>
            <div class="h-1.5 rounded-full bg-ink overflow-hidden">
                <div
                    class="h-full rounded-full bg-gradient-to-r from-lime-dim to-lime transition-all duration-1000 ease-out"
                    style=move || {
                        let width = if revealed.get() { level } else { 0 };
                        format!("width: {width}%")
                    }
                />
            </div>
        </div>
    }
}
