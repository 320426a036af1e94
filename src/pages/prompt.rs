//! Prompt Page
//!
//! Chat screen: collapsible sidebar, composer, and the session transcript.

use leptos::prelude::*;
use leptos_disclosure::{create_disclosure, make_on_toggle, Visibility};

use crate::commands::dispatch;
use crate::components::{ChatSidebar, Icon, IconKind, Transcript};
use crate::composer::Composer;
use crate::context::use_app_context;

/// Sample titles for the sidebar; sent messages are not added here
const CHAT_HISTORY: &[&str] = &[
    "AI-powered Learning Platform",
    "Learning React Effectively",
    "Modern Smooth Navbar Design",
    "අනුරාධපුර අතීත ඉතිහාසය",
    "Login page description",
    "Login page prompt creation",
    "Most famous computer lang...",
    "Vite import error fix",
    "Generate prompt request",
    "Photo background edit",
    "MERN car rental clone",
];

/// Round buttons inside the composer bar (no behavior)
const COMPOSER_TOOLS: &[IconKind] = &[IconKind::Microphone, IconKind::Music];

#[component]
pub fn PromptPage() -> impl IntoView {
    let ctx = use_app_context();
    let sidebar = create_disclosure("prompt-sidebar", Visibility::Open);
    let composer = RwSignal::new(Composer::default());

    let handle_send_message = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = composer.try_update(|c| c.begin_send()).flatten() else {
            return;
        };
        log::debug!("[prompt] sending {} chars", request.message.len());

        let backend = ctx.backend.clone();
        dispatch(
            async move { backend.send_message(&request).await },
            move |result| composer.update(|c| c.finish_send(result)),
        );
    };

    let new_chat = Callback::new(move |_: ()| composer.update(Composer::reset));
    let new_chat_disabled = Signal::derive(move || composer.with(Composer::is_pending));

    view! {
        <div class="flex h-screen bg-[#0d0d0d] text-white overflow-hidden">
            <ChatSidebar
                sidebar=sidebar
                history=CHAT_HISTORY
                on_new_chat=new_chat
                new_chat_disabled=new_chat_disabled
            />

            <div class="flex-1 flex flex-col">
                <div class="h-14 border-b border-gray-800 flex items-center justify-between px-4">
                    <div class="flex items-center space-x-4">
                        <button
                            class="p-2 hover:bg-gray-800 rounded-lg transition"
                            aria-label="Toggle sidebar"
                            aria-expanded=move || sidebar.is_open().to_string()
                            on:click=make_on_toggle(sidebar)
                        >
                            <Icon kind=IconKind::Menu />
                        </button>
                        <button class="flex items-center space-x-2 px-3 py-1.5 rounded-lg hover:bg-gray-800 transition">
                            <span class="font-medium">"SCINEX"</span>
                            <Icon kind=IconKind::ChevronDown class="w-4 h-4" />
                        </button>
                    </div>
                    <div class="flex items-center space-x-2">
                        <button class="flex items-center space-x-2 px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg transition font-medium">
                            <Icon kind=IconKind::Plus class="w-4 h-4" />
                            <span>"Get Plus"</span>
                        </button>
                        <button class="p-2 hover:bg-gray-800 rounded-lg transition">
                            <Icon kind=IconKind::User />
                        </button>
                        <button class="p-2 hover:bg-gray-800 rounded-lg transition">
                            <Icon kind=IconKind::Settings />
                        </button>
                    </div>
                </div>

                <div class="flex-1 overflow-y-auto flex flex-col items-center justify-center px-4">
                    <div class="max-w-3xl w-full text-center">
                        <Show when=move || composer.with(|c| c.transcript().is_empty())>
                            <h1 class="text-4xl font-semibold mb-12">"What can I help with?"</h1>
                        </Show>
                        <Transcript composer=composer />

                        <form class="mb-8" on:submit=handle_send_message>
                            <div class="flex items-center bg-[#2f2f2f] rounded-3xl border border-gray-700 focus-within:border-gray-600 transition">
                                <button type="button" class="p-3 hover:bg-gray-700 rounded-full transition ml-2">
                                    <Icon kind=IconKind::Plus />
                                </button>
                                <input
                                    type="text"
                                    placeholder="Ask anything"
                                    class="flex-1 bg-transparent px-4 py-3 outline-none text-white placeholder-gray-500"
                                    prop:value=move || composer.with(|c| c.draft().to_string())
                                    prop:disabled=move || composer.with(Composer::is_pending)
                                    on:input=move |ev| composer.update(|c| c.set_draft(event_target_value(&ev)))
                                />
                                <div class="flex items-center space-x-2 pr-2">
                                    <button type="button" class="p-2 hover:bg-gray-700 rounded-full transition">
                                        <svg class="w-5 h-5 text-green-500" fill="currentColor" viewBox="0 0 24 24">
                                            <circle cx="12" cy="12" r="10" />
                                        </svg>
                                    </button>
                                    {COMPOSER_TOOLS
                                        .iter()
                                        .map(|kind| view! {
                                            <button type="button" class="p-2 hover:bg-gray-700 rounded-full transition">
                                                <Icon kind=*kind />
                                            </button>
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </form>

                        {move || composer.with(|c| c.last_error().map(str::to_string)).map(|message| view! {
                            <p class="text-sm text-red-400" role="alert">{message}</p>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
