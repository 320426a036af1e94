//! Chat Sidebar Component
//!
//! Collapsible left column of the prompt view: shortcuts, pinned assistants,
//! past chat titles and the account footer.

use leptos::prelude::*;
use leptos_disclosure::{make_class, DisclosureSignals};

use super::brand_mark::BrandMark;
use super::icons::{Icon, IconKind};
use crate::routes::{use_route_navigate, AppRoute};

/// Shortcut buttons under "New chat"
const SHORTCUTS: &[(IconKind, &str)] = &[
    (IconKind::Search, "Search chats"),
    (IconKind::Image, "Images"),
    (IconKind::Apps, "Apps"),
    (IconKind::Code, "Codex"),
    (IconKind::Folder, "Projects"),
];

/// (initial, name, avatar gradient)
const ASSISTANTS: &[(&str, &str, &str)] = &[
    ("R", "Resume AI Website Builder", "from-blue-500 to-purple-600"),
    ("E", "Explore SCINEXs", "from-green-500 to-teal-600"),
];

const ROW_CLASS: &str = "w-full flex items-center space-x-3 px-3 py-2.5 rounded-lg hover:bg-gray-800 transition text-left";

#[component]
pub fn ChatSidebar(
    sidebar: DisclosureSignals,
    history: &'static [&'static str],
    #[prop(into)] on_new_chat: Callback<()>,
    /// True while a message is in flight
    #[prop(into)] new_chat_disabled: Signal<bool>,
) -> impl IntoView {
    let navigate = use_route_navigate();
    let width = make_class(
        sidebar,
        "w-64 bg-[#171717] transition-all duration-300 flex flex-col border-r border-gray-800 overflow-hidden",
        "w-0 bg-[#171717] transition-all duration-300 flex flex-col border-r border-gray-800 overflow-hidden",
    );

    view! {
        <aside class=width>
            <div class="p-4 border-b border-gray-800">
                <button
                    class="cursor-pointer flex items-center space-x-2 text-gray-400 hover:text-white transition"
                    on:click=move |_| navigate(AppRoute::Landing)
                >
                    <BrandMark label_class="font-semibold ml-1.5" />
                </button>
            </div>

            <div class="flex-1 overflow-y-auto py-4">
                <div class="px-3 space-y-2 mb-6">
                    <button
                        class=format!("{} disabled:opacity-50 disabled:cursor-not-allowed", ROW_CLASS)
                        disabled=move || new_chat_disabled.get()
                        on:click=move |_| on_new_chat.run(())
                    >
                        <Icon kind=IconKind::Plus />
                        <span>"New chat"</span>
                    </button>
                    {SHORTCUTS
                        .iter()
                        .map(|(kind, label)| view! {
                            <button class=ROW_CLASS>
                                <Icon kind=*kind />
                                <span>{*label}</span>
                            </button>
                        })
                        .collect_view()}
                </div>

                <div class="px-3 mb-4">
                    <h3 class="text-xs font-semibold text-gray-500 uppercase tracking-wider mb-2 px-3">
                        "SCINEXs"
                    </h3>
                    <div class="space-y-1">
                        {ASSISTANTS
                            .iter()
                            .map(|(initial, name, gradient)| view! {
                                <button class="w-full flex items-center space-x-3 px-3 py-2 rounded-lg hover:bg-gray-800 transition text-left text-sm">
                                    <div class=format!("w-6 h-6 bg-linear-to-br {} rounded-full flex items-center justify-center text-xs", gradient)>
                                        {*initial}
                                    </div>
                                    <span class="truncate">{*name}</span>
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="px-3">
                    <h3 class="text-xs font-semibold text-gray-500 uppercase tracking-wider mb-2 px-3">
                        "Your chats"
                    </h3>
                    <ul class="space-y-1">
                        {history
                            .iter()
                            .map(|title| view! {
                                <li>
                                    <button class="w-full flex items-center justify-between px-3 py-2 rounded-lg hover:bg-gray-800 transition text-left text-sm group">
                                        <span class="truncate text-gray-300">{*title}</span>
                                        <Icon kind=IconKind::More class="w-4 h-4 text-gray-500 opacity-0 group-hover:opacity-100 transition" />
                                    </button>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <div class="p-3 border-t border-gray-800">
                <div class="w-full flex items-center justify-between px-3 py-2 rounded-lg hover:bg-gray-800 transition">
                    <div class="flex items-center space-x-3">
                        <div class="w-8 h-8 bg-linear-to-br from-purple-500 to-pink-500 rounded-full flex items-center justify-center text-sm font-semibold">
                            "M"
                        </div>
                        <div class="text-left">
                            <div class="text-sm font-medium">"Malan Chandi..."</div>
                            <div class="text-xs text-gray-500">"Free"</div>
                        </div>
                    </div>
                    <button class="px-3 py-1 bg-gray-800 hover:bg-gray-700 rounded text-xs font-medium transition">
                        "Upgrade"
                    </button>
                </div>
            </div>
        </aside>
    }
}
