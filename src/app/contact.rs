use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::{
    contact::{ContactField, ContactFlow, CONFIRMATION_WINDOW, SUBMIT_DELAY},
    content::{CONTACT_CHANNELS, SOCIAL_LINKS},
    sections::SectionId,
};

use super::reveal::{from_left, from_right, rise, use_reveal, DEFAULT_THRESHOLD};

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, DEFAULT_THRESHOLD);
    let flow = RwSignal::new(ContactFlow::default());
    let (problem, set_problem) = signal(None::<String>);

    // Delivery is simulated: the form completes after a short pause and the
    // confirmation gives way to a fresh form once its window passes.
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(accepted) = flow.try_update(|f| f.begin()) else {
            return;
        };
        match accepted {
            Ok(()) => {
                set_problem.set(None);
                log::debug!("contact form accepted");
                set_timeout(
                    move || {
                        flow.try_update(|f| f.complete());
                        set_timeout(
                            move || {
                                flow.try_update(|f| f.expire());
                            },
                            CONFIRMATION_WINDOW,
                        );
                    },
                    SUBMIT_DELAY,
                );
            }
            Err(err) => {
                log::warn!("contact form rejected: {err}");
                set_problem.set(Some(err.to_string()));
            }
        }
    };

    let submitting = move || flow.with(|f| f.phase.is_submitting());
    let submitted = move || flow.with(|f| f.phase.is_submitted());

    view! {
        <section id=SectionId::Contact.anchor() node_ref=section_ref class="relative py-24 lg:py-32">
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute bottom-0 left-1/4 w-96 h-96 bg-lime/5 rounded-full blur-[120px]" />
            </div>

            <div class="section-container max-w-7xl mx-auto relative">
                <div class=move || format!("text-center mb-16 transition-all duration-1000 {}", rise(revealed.get()))>
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-lime/10 border border-lime/30 mb-4">
                        <i class="extra-mail text-lime" />
                        <span class="text-xs text-lime uppercase tracking-wider">"Get In Touch"</span>
                    </div>
                    <h2 class="text-4xl lg:text-5xl font-bold text-white">
                        "Let's Work " <span class="gradient-text">"Together"</span>
                    </h2>
                </div>

                <div class="grid lg:grid-cols-5 gap-12">
                    <div class=move || format!("lg:col-span-2 space-y-8 transition-all duration-1000 delay-200 {}", from_left(revealed.get()))>
                        <div class="space-y-4">
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| {
                                    view! {
                                        <a
                                            href=channel.href
                                            class="flex items-center gap-4 p-4 rounded-xl bg-panel border border-edge hover:border-lime/50 transition-all duration-300 group"
                                        >
                                            <div class="w-12 h-12 rounded-lg bg-lime/10 flex items-center justify-center group-hover:bg-lime/20 transition-colors">
                                                <i class=format!("{} text-lime", channel.icon) />
                                            </div>
                                            <div>
                                                <div class="text-xs text-gray-500">{channel.label}</div>
                                                <div class="text-white font-medium">{channel.value}</div>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div>
                            <h3 class="text-sm text-gray-500 mb-4">"Connect with me"</h3>
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
                                                class="w-12 h-12 rounded-lg bg-panel border border-edge flex items-center justify-center text-gray-400 hover:text-lime hover:border-lime/50 transition-all duration-300"
                                            >
                                                <i class=link.icon />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="p-6 rounded-xl bg-gradient-to-br from-lime/10 to-transparent border border-lime/20">
                            <div class="flex items-center gap-2 mb-2">
                                <span class="w-2 h-2 rounded-full bg-lime animate-pulse" />
                                <span class="text-sm font-medium text-lime">"Available for opportunities"</span>
                            </div>
                            <p class="text-sm text-gray-400">
                                "Open to full-time positions, freelance projects, and consulting in data engineering."
                            </p>
                        </div>
                    </div>

                    <div class=move || format!("lg:col-span-3 transition-all duration-1000 delay-300 {}", from_right(revealed.get()))>
                        <Show
                            when=submitted
                            fallback=move || {
                                view! {
                                    <form on:submit=submit class="p-8 rounded-2xl bg-panel border border-edge space-y-6">
                                        <FloatingField flow=flow field=ContactField::Name />
                                        <FloatingField flow=flow field=ContactField::Email />
                                        <FloatingField flow=flow field=ContactField::Message />
                                        {move || {
                                            problem
                                                .get()
                                                .map(|msg| view! { <p class="text-sm text-red-400">{msg}</p> })
                                        }}
                                        <button
                                            type="submit"
                                            disabled=submitting
                                            class="btn-primary w-full flex items-center justify-center gap-2 disabled:opacity-70"
                                        >
                                            <Show
                                                when=submitting
                                                fallback=|| view! { "Send Message" <i class="extra-send" /> }
                                            >
                                                <span class="w-5 h-5 border-2 border-ink/30 border-t-ink rounded-full animate-spin" />
                                                "Sending..."
                                            </Show>
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="p-8 rounded-2xl bg-panel border border-lime/50 text-center space-y-4">
                                <div class="w-16 h-16 mx-auto rounded-full bg-lime/10 flex items-center justify-center">
                                    <i class="extra-check-circle text-3xl text-lime" />
                                </div>
                                <h3 class="text-2xl font-bold text-white">"Message Sent!"</h3>
                                <p class="text-gray-400">"Thanks for reaching out. I'll get back to you soon."</p>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Text input whose label floats above the box while focused or filled.
#[component]
fn FloatingField(flow: RwSignal<ContactFlow>, field: ContactField) -> impl IntoView {
    let (focused, set_focused) = signal(false);
    let value = move || flow.with(|f| f.form.get(field).to_string());
    let raised = move || focused.get() || flow.with(|f| !f.form.get(field).is_empty());
    let on_input = move |ev| flow.update(|f| f.form.set(field, event_target_value(&ev)));

    let input_class = "w-full px-4 pt-6 pb-2 bg-ink border border-edge rounded-lg text-white focus:border-lime focus:outline-none transition-colors";
    let label_class = move || {
        if raised() {
            "absolute left-4 top-2 text-xs text-lime transition-all duration-200 pointer-events-none"
        } else {
            "absolute left-4 top-4 text-base text-gray-500 transition-all duration-200 pointer-events-none"
        }
    };

    let input = match field {
        ContactField::Message => view! {
            <textarea
                rows="5"
                required
                class=format!("{input_class} resize-none")
                prop:value=value
                on:input=on_input
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
            />
        }
        .into_any(),
        ContactField::Name | ContactField::Email => view! {
            <input
                type=if field == ContactField::Email { "email" } else { "text" }
                required
                class=input_class
                prop:value=value
                on:input=on_input
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
            />
        }
        .into_any(),
    };

    view! {
        <div class="relative">
            {input}
            <label class=label_class>{field.label()}</label>
        </div>
    }
}
