mod about;
mod constellation;
mod contact;
mod counter;
mod experience;
mod footer;
mod hero;
mod navigation;
mod projects;
mod reveal;
mod scroll;
mod skills;
mod tech_marquee;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{OWNER_NAME, OWNER_TITLE};

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navigation::Navigation;
use projects::Projects;
use skills::Skills;
use tech_marquee::TechMarquee;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-ink text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta
            name="description"
            content=format!("{OWNER_NAME}, {OWNER_TITLE}: pipelines, warehouses and analytics.")
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole site: one scrolling page of sections.
#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text=OWNER_TITLE />
        <div class="relative min-h-screen bg-ink overflow-x-hidden">
            <div class="grain-overlay" />
            <Navigation />
            <main class="relative z-10">
                <Hero />
                <TechMarquee />
                <About />
                <Experience />
                <Projects />
                <Skills />
                <Contact />
                <Footer />
            </main>
        </div>
    }
}
