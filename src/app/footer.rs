use leptos::prelude::*;

use crate::{
    content::{CONTACT_EMAIL, OWNER_NAME, SERVICES, SOCIAL_LINKS},
    sections::SectionId,
};

use super::scroll::{scroll_to_section, scroll_to_top};

#[component]
pub fn Footer() -> impl IntoView {
    let year = env!("BUILD_YEAR");
    let built = env!("BUILD_TIME");

    view! {
        <footer class="relative border-t border-edge/50">
            <div class="section-container max-w-7xl mx-auto py-16">
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-12">
                    <div class="lg:col-span-2 space-y-4">
                        <div class="flex items-center gap-2">
                            <div class="w-10 h-10 flex items-center justify-center rounded-lg bg-panel border border-edge">
                                <i class="extra-database text-lime" />
                            </div>
                            <span class="text-lg font-semibold text-white">{OWNER_NAME}</span>
                        </div>
                        <p class="text-gray-400 max-w-md">
                            "Building scalable data infrastructure and transforming complex datasets into actionable insights. Let's create something amazing together."
                        </p>
                        <div class="flex gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="w-10 h-10 rounded-lg bg-panel border border-edge flex items-center justify-center text-gray-400 hover:text-lime hover:border-lime/50 transition-all duration-300"
                                        >
                                            <i class=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=format!("mailto:{CONTACT_EMAIL}")
                                aria-label="Email"
                                class="w-10 h-10 rounded-lg bg-panel border border-edge flex items-center justify-center text-gray-400 hover:text-lime hover:border-lime/50 transition-all duration-300"
                            >
                                <i class="extra-mail" />
                            </a>
                        </div>
                    </div>

                    <div>
                        <h3 class="text-sm font-semibold text-white uppercase tracking-wider mb-4">"Quick Links"</h3>
                        <ul class="space-y-3">
                            {SectionId::ALL
                                .into_iter()
                                .map(|id| {
                                    view! {
                                        <li>
                                            <a
                                                href=id.href()
                                                class="text-gray-400 hover:text-lime transition-colors"
                                                on:click=move |ev| {
                                                    if scroll_to_section(id) {
                                                        ev.prevent_default();
                                                    }
                                                }
                                            >
                                                {id.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-sm font-semibold text-white uppercase tracking-wider mb-4">"Services"</h3>
                        <ul class="space-y-3">
                            {SERVICES
                                .iter()
                                .map(|service| view! { <li class="text-gray-400">{*service}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="mt-12 pt-8 border-t border-edge/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <p class="text-sm text-gray-500" title=format!("Built {built}")>
                        "© " {year} " " {OWNER_NAME} ". Crafted with " <i class="extra-heart text-lime" />
                        " and lots of data."
                    </p>
                    <button
                        class="w-10 h-10 rounded-lg bg-panel border border-edge flex items-center justify-center text-gray-400 hover:text-lime hover:border-lime/50 transition-all duration-300"
                        aria-label="Back to top"
                        on:click=move |_| scroll_to_top()
                    >
                        <i class="extra-arrow-up" />
                    </button>
                </div>
            </div>
        </footer>
    }
}
