use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::{
    catalog::{Catalog, CategoryFilter, ProjectRecord, Status},
    content::{Accent, CATALOG},
};

static NUMBERS: [(&str, &str, &str, Accent); 3] = [
    (
        "20+",
        "Projects Completed",
        "Across various domains and technologies",
        Accent::Blue,
    ),
    (
        "5+",
        "Years Experience",
        "Full stack development & UI/UX design",
        Accent::Green,
    ),
    (
        "100%",
        "Client Satisfaction",
        "Consistently delivering quality work",
        Accent::Purple,
    ),
];

static CHIP_ACTIVE: &str = "px-4 py-2 rounded-full text-sm font-medium bg-blue-600 text-white";
static CHIP_IDLE: &str = "px-4 py-2 rounded-full text-sm font-medium bg-gray-100 text-gray-700 hover:bg-gray-200 dark:bg-gray-800 dark:text-gray-300 dark:hover:bg-gray-700";

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let catalog: &'static Catalog = &CATALOG;
    let counts = catalog.counts();
    let (category, set_category) = signal(CategoryFilter::All);
    let (query, set_query) = signal(String::new());

    // recomputed on every keystroke; the catalog is a few dozen entries at most
    let visible = Memo::new(move |_| {
        category.with(|c| {
            query.with(|q| {
                catalog
                    .filter(c, q)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    });

    view! {
        <Title text="Projects" />
        <div class="min-h-screen bg-gradient-to-b from-gray-50 to-white dark:from-gray-900 dark:to-gray-800 py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4">
                        "Solutions "
                        <span class="text-blue-600 dark:text-blue-400">"Engineered"</span>
                    </h1>
                    <p class="text-lg md:text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "Selected works showcasing technical expertise and problem-solving across different domains"
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-3 mb-6">
                    {counts
                        .entries()
                        .into_iter()
                        .map(|(filter, n)| {
                            let label = format!("{} ({n})", filter.label());
                            let chip = filter.clone();
                            let is_active = Memo::new(move |_| category.with(|c| *c == chip));
                            view! {
                                <button
                                    type="button"
                                    class=move || if is_active.get() { CHIP_ACTIVE } else { CHIP_IDLE }
                                    aria-pressed=move || is_active.get().to_string()
                                    on:click=move |_| set_category(filter.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="max-w-xl mx-auto mb-4">
                    <input
                        type="search"
                        aria-label="Search projects"
                        placeholder="Search by title, description or technology..."
                        class="w-full px-4 py-3 border border-gray-300 dark:border-gray-700 rounded-lg bg-white dark:bg-gray-800 focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                        prop:value=query
                        on:input=move |ev| set_query(event_target_value(&ev))
                    />
                </div>
                <p class="text-center text-sm text-gray-500 dark:text-gray-400 mb-10">
                    {move || {
                        format!("Showing {} of {} projects", visible.with(Vec::len), catalog.len())
                    }}
                </p>

                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| {
                        view! {
                            <p class="text-center text-gray-600 dark:text-gray-300 py-16">
                                "No projects match your filters."
                            </p>
                        }
                    }
                >
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-20">
                        <For each=move || visible.get() key=|p| p.title.clone() let:project>
                            <ProjectCard project />
                        </For>
                    </div>
                </Show>

                <Numbers />
                <ProjectsCta />
            </div>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let status_class = match project.status {
        Status::Live => {
            "px-3 py-1 text-sm font-medium rounded-full bg-green-100 text-green-700 dark:bg-green-900/30 dark:text-green-300"
        }
        Status::InDevelopment => {
            "px-3 py-1 text-sm font-medium rounded-full bg-yellow-100 text-yellow-700 dark:bg-yellow-900/30 dark:text-yellow-300"
        }
    };
    let has_links = project.link.is_some() || project.repository.is_some();

    view! {
        <article class="group relative bg-white dark:bg-gray-800 rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl hover:-translate-y-2 transition-all duration-300 border border-gray-200 dark:border-gray-700">
            <div class="p-6 border-b border-gray-100 dark:border-gray-700">
                <div class="flex justify-between items-start mb-4">
                    <div class="flex items-center gap-3">
                        <div class="text-3xl">{project.emoji}</div>
                        <span class="px-3 py-1 bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 text-sm font-medium rounded-full">
                            {project.category}
                        </span>
                    </div>
                    <span class=status_class>{project.status.label()}</span>
                </div>
                <h3 class="text-xl font-bold mb-3 group-hover:text-blue-600 dark:group-hover:text-blue-400 transition">
                    {project.title}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4 line-clamp-3">
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .features
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <span class="px-3 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 text-sm rounded-full">
                                    {feature}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-gray-50 dark:bg-gray-900 text-gray-600 dark:text-gray-400 text-xs rounded-full border border-gray-200 dark:border-gray-700">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {has_links
                .then(|| {
                    view! {
                        <div class="p-6 bg-gray-50 dark:bg-gray-900/50 flex gap-3">
                            {project
                                .link
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex-1 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition text-center"
                                        >
                                            "Live Demo ↗"
                                        </a>
                                    }
                                })}
                            {project
                                .repository
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="px-4 py-3 bg-gray-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600 rounded-lg transition text-center"
                                        >
                                            "Source"
                                        </a>
                                    }
                                })}
                        </div>
                    }
                })}
        </article>
    }
}

#[component]
fn Numbers() -> impl IntoView {
    view! {
        <section class="mb-20">
            <div class="text-center mb-12">
                <h2 class="text-3xl font-bold mb-4">
                    "By the " <span class="text-blue-600 dark:text-blue-400">"Numbers"</span>
                </h2>
                <p class="text-gray-600 dark:text-gray-300">
                    "Impactful metrics from my development journey"
                </p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {NUMBERS
                    .iter()
                    .map(|(value, label, description, accent)| {
                        view! {
                            <div class="bg-white dark:bg-gray-800 p-8 rounded-2xl shadow-lg border border-gray-100 dark:border-gray-700 text-center">
                                <div class=format!("text-5xl font-bold mb-2 {}", accent.text_class())>
                                    {*value}
                                </div>
                                <h3 class="text-xl font-bold mb-2">{*label}</h3>
                                <p class="text-gray-600 dark:text-gray-300">{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectsCta() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl p-8 md:p-12 text-center text-white">
            <h2 class="text-3xl font-bold mb-4">"Ready to Start Your Project?"</h2>
            <p class="text-blue-100 mb-8 max-w-2xl mx-auto">
                "Have an idea you want to bring to life? Let's discuss how we can work together to create something amazing."
            </p>
            <div class="flex flex-col sm:flex-row gap-4 justify-center">
                <A
                    href="/contact"
                    attr:class="px-8 py-3 bg-white text-blue-600 font-bold rounded-lg hover:bg-gray-100 transition"
                >
                    "Get In Touch"
                </A>
                <a
                    href="mailto:benshomwiti@gmail.com"
                    class="px-8 py-3 bg-transparent border-2 border-white text-white font-bold rounded-lg hover:bg-white/10 transition"
                >
                    "Email Me"
                </a>
            </div>
        </section>
    }
}
