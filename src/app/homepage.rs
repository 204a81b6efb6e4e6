use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::projects::ProjectCard;
use crate::{
    catalog::Status,
    content::{Accent, CATALOG},
};

static HERO_STATS: [(&str, &str, Accent); 3] = [
    ("50+", "Projects", Accent::Blue),
    ("5+", "Years Exp", Accent::Purple),
    ("100%", "Satisfaction", Accent::Green),
];

static HERO_TECH: [&str; 4] = ["React", "Next.js", "TypeScript", "Node.js"];

const FEATURED: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = CATALOG
        .records()
        .iter()
        .filter(|p| p.status == Status::Live)
        .take(FEATURED)
        .cloned()
        .collect::<Vec<_>>();

    view! {
        <Title text="Home" />
        <section class="relative overflow-hidden py-20 bg-gradient-to-br from-blue-50 via-white to-purple-50 dark:from-gray-900 dark:via-gray-900 dark:to-gray-800">
            <div class="max-w-7xl mx-auto px-6 grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <span class="inline-block px-4 py-2 mb-6 bg-green-100 text-green-700 dark:bg-green-900/30 dark:text-green-300 rounded-full text-sm font-medium">
                        "Open to Remote/on-site/Hybrid Opportunities"
                    </span>
                    <h1 class="text-5xl md:text-6xl font-bold mb-4">
                        "Benson "
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Mwiti"
                        </span>
                    </h1>
                    <h2 class="text-2xl font-semibold text-gray-700 dark:text-gray-300 mb-6">
                        "Full Stack Engineer & UI/UX Designer"
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-300 mb-8 max-w-xl">
                        "Crafting exceptional digital experiences through clean code, intuitive design, and scalable architecture."
                    </p>
                    <div class="grid grid-cols-3 gap-4 mb-8 max-w-md">
                        {HERO_STATS
                            .iter()
                            .map(|(value, label, accent)| {
                                view! {
                                    <div class="text-center p-4 bg-white dark:bg-gray-800 rounded-xl shadow">
                                        <div class=format!("text-3xl font-bold {}", accent.text_class())>
                                            {*value}
                                        </div>
                                        <div class="text-sm text-gray-600 dark:text-gray-400">{*label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <A
                            href="/projects"
                            attr:class="px-8 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg text-center transition"
                        >
                            "Check out my projects →"
                        </A>
                        <A
                            href="/contact"
                            attr:class="px-8 py-3 border-2 border-blue-600 text-blue-600 dark:text-blue-400 font-medium rounded-lg text-center hover:bg-blue-50 dark:hover:bg-gray-800 transition"
                        >
                            "Contact Me"
                        </A>
                    </div>
                </div>
                <div class="flex flex-col items-center gap-6">
                    <img
                        src="/images/profile/profile-main.jpg"
                        alt="Benson Mwiti - Full Stack Developer & UI/UX Designer"
                        class="w-64 h-64 md:w-80 md:h-80 lg:w-96 lg:h-96 rounded-full object-cover border-4 border-blue-600/40 shadow-2xl"
                    />
                    <div class="flex flex-wrap justify-center gap-2">
                        {HERO_TECH
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200 rounded-full text-sm font-medium">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
        <section class="py-20">
            <div class="max-w-7xl mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">
                    "Featured "<span class="text-blue-600 dark:text-blue-400">"Projects"</span>
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {featured
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
                <div class="text-center mt-12">
                    <A
                        href="/projects"
                        attr:class="text-blue-600 dark:text-blue-400 font-medium hover:underline"
                    >
                        "View all projects →"
                    </A>
                </div>
            </div>
        </section>
    }
}
