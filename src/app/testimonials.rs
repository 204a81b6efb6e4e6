use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::{average_rating, Accent, Testimonial, TESTIMONIALS};

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let testimonials: &'static [Testimonial] = &TESTIMONIALS;
    let rating = average_rating(testimonials)
        .map(|r| format!("{r:.1}/5"))
        .unwrap_or_else(|| "-".to_string());
    let stats = [
        ("100%".to_string(), "Client Retention", Accent::Green),
        (rating, "Average Rating", Accent::Yellow),
        ("24h".to_string(), "Avg Response Time", Accent::Blue),
        ("30+".to_string(), "Projects Delivered", Accent::Purple),
    ];

    view! {
        <Title text="Testimonials" />
        <div class="min-h-screen bg-gradient-to-b from-gray-50 to-white dark:from-gray-900 dark:to-gray-800 py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <span class="inline-flex items-center gap-2 px-4 py-2 bg-yellow-100 dark:bg-yellow-900/30 text-yellow-700 dark:text-yellow-300 rounded-full mb-6 text-sm font-medium">
                        "❝ Client Testimonials"
                    </span>
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4">
                        "Trusted by " <span class="text-blue-600 dark:text-blue-400">"Clients"</span>
                    </h1>
                    <p class="text-lg md:text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "Here's what startups, enterprises, and collaborators say about working with me"
                    </p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-16">
                    {stats
                        .into_iter()
                        .map(|(value, label, accent)| {
                            view! {
                                <div class="bg-white dark:bg-gray-800 p-6 rounded-2xl shadow-lg text-center">
                                    <div class=format!("text-3xl font-bold mb-1 {}", accent.text_class())>
                                        {value}
                                    </div>
                                    <div class="text-sm text-gray-600 dark:text-gray-400">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-20">
                    {testimonials
                        .iter()
                        .cloned()
                        .map(|testimonial| view! { <TestimonialCard testimonial /> })
                        .collect_view()}
                </div>

                <div class="bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl p-8 md:p-12 text-center text-white">
                    <h2 class="text-3xl font-bold mb-4">"Want to be my next success story?"</h2>
                    <A
                        href="/contact"
                        attr:class="inline-block px-8 py-3 bg-white text-blue-600 font-bold rounded-lg hover:bg-gray-100 transition"
                    >
                        "Start a Project"
                    </A>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let star_count = testimonial.stars();
    let stars = "★".repeat(star_count);
    let initial = testimonial.initial();
    view! {
        <article class="bg-white dark:bg-gray-800 p-8 rounded-2xl shadow-lg border border-gray-100 dark:border-gray-700 flex flex-col">
            <div class="text-yellow-500 mb-4" aria-label=format!("{star_count} out of 5 stars")>
                {stars}
            </div>
            <p class="text-gray-600 dark:text-gray-300 mb-6 italic flex-grow">
                {format!("\"{}\"", testimonial.content)}
            </p>
            <span class="self-start px-3 py-1 mb-6 bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 text-xs font-medium rounded-full">
                {testimonial.project}
            </span>
            <div class="flex items-center gap-4">
                <div class="w-12 h-12 rounded-full bg-gradient-to-br from-blue-600 to-purple-600 text-white flex items-center justify-center font-bold text-lg">
                    {initial}
                </div>
                <div>
                    <h4 class="font-bold">{testimonial.author}</h4>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{testimonial.role}</p>
                    {testimonial
                        .company
                        .map(|company| {
                            view! {
                                <p class="text-sm text-blue-600 dark:text-blue-400">{company}</p>
                            }
                        })}
                </div>
            </div>
            {testimonial
                .link
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="mt-6 text-sm font-medium text-blue-600 dark:text-blue-400 hover:underline"
                        >
                            "View Project ↗"
                        </a>
                    }
                })}
        </article>
    }
}
