use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::{Accent, SKILLS};

static TIMELINE: [(&str, &str, &str); 6] = [
    (
        "2019",
        "Started Freelancing",
        "Began working on web projects for local businesses",
    ),
    (
        "2020",
        "Full Stack Developer",
        "Joined a tech startup building SaaS products",
    ),
    (
        "2021",
        "UI/UX Specialization",
        "Completed advanced design courses and certifications",
    ),
    (
        "2022",
        "Senior Developer",
        "Led multiple teams on complex web applications",
    ),
    (
        "2023",
        "Remote Consulting",
        "Started working with international clients worldwide",
    ),
    (
        "2024",
        "Current Focus",
        "Building scalable products and mentoring junior developers",
    ),
];

static STATS: [(&str, &str, Accent); 4] = [
    ("50+", "Projects Delivered", Accent::Blue),
    ("5+", "Years Experience", Accent::Green),
    ("100%", "Client Satisfaction", Accent::Purple),
    ("30+", "Happy Clients", Accent::Yellow),
];

static QUICK_FACTS: [(&str, &str); 3] = [
    ("🌍", "Nairobi, Kenya (Remote Worldwide)"),
    ("🎯", "Full Stack Web & Mobile Development"),
    ("⚡", "Open for new projects & collaborations"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <section class="py-20 bg-gradient-to-b from-gray-50 to-white dark:from-gray-900 dark:to-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">
                        "About " <span class="text-blue-600 dark:text-blue-400">"Me"</span>
                    </h1>
                    <p class="text-lg md:text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "Full Stack Engineer & UI/UX Designer with 5+ years of experience crafting exceptional digital experiences that solve real problems."
                    </p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-20">
                    {STATS
                        .iter()
                        .map(|(value, label, accent)| {
                            view! {
                                <div class="bg-white dark:bg-gray-800 p-6 rounded-2xl shadow-lg text-center">
                                    <div class=format!("text-3xl font-bold mb-1 {}", accent.text_class())>
                                        {*value}
                                    </div>
                                    <div class="text-sm text-gray-600 dark:text-gray-400">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid lg:grid-cols-2 gap-12 mb-20">
                    <Bio />
                    <div class="space-y-8">
                        <div class="bg-white dark:bg-gray-800 p-6 rounded-2xl shadow-lg">
                            <h3 class="text-xl font-bold mb-4">"Quick Facts"</h3>
                            <div class="space-y-3">
                                {QUICK_FACTS
                                    .iter()
                                    .map(|(icon, fact)| {
                                        view! {
                                            <div class="flex items-center gap-3">
                                                <span class="text-xl">{*icon}</span>
                                                <p class="text-gray-700 dark:text-gray-300">{*fact}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <Timeline />
                    </div>
                </div>

                <Skills />

                <div class="mt-20 bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl p-8 md:p-12 text-center text-white">
                    <h2 class="text-3xl font-bold mb-4">"Ready to Build Something Amazing?"</h2>
                    <p class="text-blue-100 mb-8 max-w-2xl mx-auto">
                        "Whether you have a project in mind or just want to discuss potential opportunities, I'd love to hear from you."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <A
                            href="/contact"
                            attr:class="px-8 py-3 bg-white text-blue-600 font-bold rounded-lg hover:bg-gray-100 transition"
                        >
                            "Start a Conversation"
                        </A>
                        <A
                            href="/projects"
                            attr:class="px-8 py-3 border-2 border-white text-white font-bold rounded-lg hover:bg-white/10 transition"
                        >
                            "View My Work"
                        </A>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Bio() -> impl IntoView {
    view! {
        <div>
            <h2 class="text-3xl font-bold mb-6">"My Journey in Tech"</h2>
            <div class="space-y-4 text-gray-700 dark:text-gray-300 leading-relaxed">
                <p>
                    "I'm " <span class="font-semibold text-blue-600 dark:text-blue-400">"Benson Mwiti"</span>
                    ", a passionate Full Stack Engineer and UI/UX Designer based in Nairobi, Kenya. My journey began with a curiosity about how things work on the web, which evolved into a career dedicated to building exceptional digital experiences."
                </p>
                <p>
                    "Over the past 5+ years, I've had the privilege of working with startups, enterprises, and agencies across different continents. What drives me is the opportunity to transform complex challenges into elegant, user-friendly solutions that not only meet business goals but exceed user expectations."
                </p>
                <p>
                    "My approach is unique because I bridge the gap between "
                    <span class="font-semibold">"technical implementation"</span> " and "
                    <span class="font-semibold">"user-centered design"</span>
                    ". I believe that great products require both solid engineering and thoughtful design working in harmony."
                </p>
                <div class="bg-blue-50 dark:bg-gray-800 p-6 rounded-xl border-l-4 border-blue-600">
                    <h4 class="font-bold mb-2">"My Philosophy"</h4>
                    <p class="italic">
                        "\"Great software is built on three pillars: clean code, intuitive design, and scalable architecture. When these elements work together, they create experiences that users love and businesses thrive on.\""
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 p-6 rounded-2xl shadow-lg">
            <h3 class="text-xl font-bold mb-6">"Career Timeline"</h3>
            <ol class="relative border-l-2 border-blue-200 dark:border-blue-900 ml-3 space-y-6">
                {TIMELINE
                    .iter()
                    .map(|(year, title, description)| {
                        view! {
                            <li class="ml-6">
                                <span class="absolute -left-2 mt-1.5 w-3.5 h-3.5 rounded-full bg-blue-600"></span>
                                <div class="text-sm font-bold text-blue-600 dark:text-blue-400">{*year}</div>
                                <h4 class="font-bold">{*title}</h4>
                                <p class="text-sm text-gray-600 dark:text-gray-400">{*description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section>
            <div class="text-center mb-12">
                <h2 class="text-3xl font-bold mb-4">
                    "Technical " <span class="text-blue-600 dark:text-blue-400">"Expertise"</span>
                </h2>
                <p class="text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                    "A comprehensive toolkit of technologies and methodologies I use to build exceptional products"
                </p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {SKILLS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="bg-white dark:bg-gray-800 p-6 rounded-2xl shadow-lg border border-gray-100 dark:border-gray-700">
                                <h3 class=format!("text-xl font-bold mb-4 {}", group.accent.text_class())>
                                    {group.category.clone()}
                                </h3>
                                <div class="flex flex-wrap gap-2">
                                    {group
                                        .items
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <span class=format!(
                                                    "px-3 py-1 text-sm rounded-full {}",
                                                    group.accent.badge_class(),
                                                )>{skill.clone()}</span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
