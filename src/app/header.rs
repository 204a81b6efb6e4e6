use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use super::theme::{use_theme, Theme};

static NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Projects", "/projects"),
    ("About", "/about"),
    ("Testimonials", "/testimonials"),
    ("Contact", "/contact"),
];

static LINK_CLASS: &str = "hover:text-blue-600 dark:hover:text-blue-400 transition aria-[current=page]:text-blue-600 dark:aria-[current=page]:text-blue-400";

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let (menu_open, set_menu_open) = signal(false);

    let location = use_location();
    Effect::watch(
        move || location.pathname.get(),
        move |_, _, _| set_menu_open(false),
        false,
    );

    let toggle_label = move || match theme.get() {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };

    view! {
        <nav class="sticky top-0 z-50 bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-b border-gray-200 dark:border-gray-800">
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <A href="/" attr:class="flex items-center gap-2 text-xl font-bold">
                        <span class="text-blue-600 dark:text-blue-400">"</>"</span>
                        <span>"Benson Mwiti"</span>
                    </A>

                    <div class="hidden md:flex items-center gap-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <A href=*href attr:class=LINK_CLASS>
                                        {*name}
                                    </A>
                                }
                            })
                            .collect_view()}
                        <button
                            type="button"
                            class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition"
                            aria-label=toggle_label
                            on:click=move |_| theme.toggle()
                        >
                            {move || match theme.get() {
                                Theme::Light => "☾",
                                Theme::Dark => "☀",
                            }}
                        </button>
                        <A
                            href="/contact"
                            attr:class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                        >
                            "Hire Me"
                        </A>
                    </div>

                    <div class="md:hidden flex items-center gap-2">
                        <button
                            type="button"
                            class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition"
                            aria-label=toggle_label
                            on:click=move |_| theme.toggle()
                        >
                            {move || match theme.get() {
                                Theme::Light => "☾",
                                Theme::Dark => "☀",
                            }}
                        </button>
                        <button
                            type="button"
                            class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-4 pb-4 border-t border-gray-200 dark:border-gray-800 pt-4">
                        <div class="flex flex-col gap-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|(name, href)| {
                                    view! {
                                        <A
                                            href=*href
                                            attr:class="py-3 px-4 rounded-lg hover:bg-gray-50 dark:hover:bg-gray-800 aria-[current=page]:text-blue-600"
                                        >
                                            {*name}
                                        </A>
                                    }
                                })
                                .collect_view()}
                            <A
                                href="/contact"
                                attr:class="py-3 px-4 bg-blue-600 text-white rounded-lg text-center hover:bg-blue-700 transition-colors mt-2"
                            >
                                "Hire Me"
                            </A>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
