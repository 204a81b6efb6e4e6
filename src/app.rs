mod about;
mod contact;
mod header;
mod homepage;
mod projects;
mod testimonials;
mod theme;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use contact::ContactPage;
use header::Header;
use homepage::HomePage;
use projects::ProjectsPage;
use testimonials::TestimonialsPage;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Benson Mwiti - Full Stack Engineer & UI/UX Designer based in Nairobi, Kenya."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Title formatter=|title| format!("Benson Mwiti - {title}") />

        <Router>
            <div class=move || {
                format!(
                    "{} min-h-screen flex flex-col bg-white text-gray-900 dark:bg-gray-900 dark:text-white",
                    theme.class(),
                )
            }>
                <Header />
                <main class="flex-grow w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/testimonials") view=TestimonialsPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

fn build_year() -> i32 {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 dark:border-gray-800 py-8">
            <div class="container mx-auto px-6 flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-gray-600 dark:text-gray-400">
                <p>{format!("© {} Benson Mwiti. Built with Rust and Leptos.", build_year())}</p>
                <div class="flex gap-6">
                    <a
                        href="https://github.com/mamoshi572"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-blue-600 dark:hover:text-blue-400"
                    >
                        "GitHub"
                    </a>
                    <a
                        href="https://linkedin.com/in/bensonmwiti"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-blue-600 dark:hover:text-blue-400"
                    >
                        "LinkedIn"
                    </a>
                    <a href="mailto:benshomwiti@gmail.com" class="hover:text-blue-600 dark:hover:text-blue-400">
                        "Email"
                    </a>
                </div>
            </div>
        </footer>
    }
}
