//! Landing Page
//!
//! Marketing page. Only state is the mobile menu; everything else dispatches
//! navigation.

use leptos::prelude::*;
use leptos_disclosure::{create_disclosure, make_class, make_on_close, Visibility};

use crate::components::{BrandMark, HamburgerButton};
use crate::routes::{use_route_navigate, AppRoute};

/// In-page section anchors
const SECTIONS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#features", "Features"),
    ("#pricing", "Pricing"),
    ("#about", "About US"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let menu = create_disclosure("landing-menu", Visibility::Closed);
    let navigate = use_route_navigate();

    let to_signup = navigate.clone();
    let overlay_signup = navigate.clone();
    let get_started = navigate;

    let overlay_class = make_class(
        menu,
        "fixed inset-0 bg-black/95 backdrop-blur-lg z-40 md:hidden transition-all duration-300 opacity-100 visible",
        "fixed inset-0 bg-black/95 backdrop-blur-lg z-40 md:hidden transition-all duration-300 opacity-0 invisible",
    );

    view! {
        <div class="min-h-screen bg-black text-white relative overflow-hidden">
            <div class="absolute inset-0 bg-grid-pattern opacity-20"></div>
            <div class="absolute bottom-0 left-1/2 -translate-x-1/2 w-200 h-100 bg-gradient-radial from-gray-600/30 to-transparent blur-3xl"></div>

            <nav class="relative z-10 flex items-center justify-between px-8 py-6">
                <div class="cursor-pointer flex items-center space-x-2">
                    <BrandMark />
                </div>

                <div class="hidden md:flex space-x-8">
                    {SECTIONS
                        .iter()
                        .map(|(href, label)| view! {
                            <a href=*href class="hover:text-gray-300 transition">{*label}</a>
                        })
                        .collect_view()}
                </div>

                <button
                    class="cursor-pointer hidden md:block bg-white text-black px-9 py-2 rounded-full font-medium hover:bg-gray-200 transition"
                    on:click=move |_| to_signup(AppRoute::Signup)
                >
                    "SIGN UP"
                </button>

                <HamburgerButton menu=menu />
            </nav>

            <div class=overlay_class>
                <div class="flex flex-col items-center justify-center h-full space-y-8">
                    {SECTIONS
                        .iter()
                        .map(|(href, label)| view! {
                            <a
                                href=*href
                                class="text-2xl hover:text-gray-300 transition"
                                on:click=make_on_close(menu)
                            >
                                {*label}
                            </a>
                        })
                        .collect_view()}
                    <button
                        class="cursor-pointer bg-white text-black px-8 py-3 rounded-full font-medium hover:bg-gray-200 transition mt-4"
                        on:click=move |_| {
                            menu.close();
                            overlay_signup(AppRoute::Signup);
                        }
                    >
                        "SIGN UP"
                    </button>
                </div>
            </div>

            <main class="relative z-10 flex flex-col items-center justify-center px-4 pt-20 pb-32">
                <div class="mb-8 inline-flex items-center space-x-2 border border-gray-700 rounded-full px-4 py-2 text-sm">
                    <span class="text-white">"✦"</span>
                    <span>"AI-Powered Learning Platform for Science for Technology"</span>
                </div>

                <h1 class="text-5xl md:text-7xl font-bold text-center max-w-4xl leading-tight mb-6">
                    "SCINEX " <span class="text-gray-400">"Not Just Answers, Understanding."</span>
                </h1>

                <p class="text-gray-400 text-center max-w-2xl mb-10 text-lg">
                    "SCINEX is an AI-powered learning platform for Science for Technology that adapts to each student's thinking style. "
                    "Learn concepts deeply, write your own answers, and get intelligent feedback that helps you truly understand, not just memorize."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 mb-16">
                    <button
                        class="cursor-pointer bg-white text-black px-9 py-3 rounded-full font-medium hover:bg-gray-200 transition"
                        on:click=move |_| get_started(AppRoute::Prompt)
                    >
                        "Get Started"
                    </button>
                    <button class="cursor-pointer border border-gray-700 text-white px-9 py-3 rounded-full font-medium hover:bg-gray-900 transition">
                        "Learn More"
                    </button>
                </div>
            </main>

            <div class="absolute bottom-0 left-0 right-0 w-full h-64 overflow-hidden pointer-events-none">
                <div class="absolute bottom-0 left-1/2 -translate-x-1/2 w-[90%] h-48">
                    <div class="absolute inset-0 bg-linear-to-t from-gray-500/20 via-gray-600/30 to-transparent blur-6xl rounded-t-[90%]"></div>
                    <div class="absolute top-6 left-0 right-0 h-4 bg-linear-to-r from-transparent via-gray-400/40 to-transparent blur-xs"></div>
                </div>
            </div>
        </div>
    }
}
