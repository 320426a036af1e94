//! Transcript Component
//!
//! Messages confirmed during this visit to the prompt view.

use leptos::prelude::*;

use crate::composer::Composer;

#[component]
pub fn Transcript(composer: RwSignal<Composer>) -> impl IntoView {
    view! {
        <ol class="w-full space-y-4 mb-8 text-left">
            <For
                each=move || composer.with(|c| c.transcript().to_vec())
                key=|turn| turn.id
                children=move |turn| {
                    view! {
                        <li class="space-y-2">
                            <p class="ml-auto w-fit max-w-[80%] bg-[#2f2f2f] rounded-2xl px-4 py-2">
                                {turn.prompt}
                            </p>
                            {turn.reply.map(|reply| view! {
                                <p class="max-w-[80%] text-gray-300 px-1">{reply}</p>
                            })}
                        </li>
                    }
                }
            />
        </ol>
    }
}
