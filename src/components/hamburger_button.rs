//! Hamburger Button Component
//!
//! Three bars that fold into a cross while the menu is open.

use leptos::prelude::*;
use leptos_disclosure::{make_class, make_on_toggle, DisclosureSignals};

#[component]
pub fn HamburgerButton(menu: DisclosureSignals) -> impl IntoView {
    let top = make_class(
        menu,
        "block w-full h-0.5 bg-white transition-all duration-300 origin-center rotate-45 translate-y-2.25",
        "block w-full h-0.5 bg-white transition-all duration-300 origin-center",
    );
    let middle = make_class(
        menu,
        "block w-full h-0.5 bg-white transition-all duration-300 opacity-0 scale-0",
        "block w-full h-0.5 bg-white transition-all duration-300 opacity-100 scale-100",
    );
    let bottom = make_class(
        menu,
        "block w-full h-0.5 bg-white transition-all duration-300 origin-center -rotate-45 -translate-y-2.25",
        "block w-full h-0.5 bg-white transition-all duration-300 origin-center",
    );

    view! {
        <button
            class="md:hidden z-50 relative w-10 h-10 flex flex-col items-center justify-center"
            aria-label="Toggle menu"
            aria-expanded=move || menu.is_open().to_string()
            on:click=make_on_toggle(menu)
        >
            <div class="w-6 h-5 relative flex flex-col justify-between">
                <span class=top></span>
                <span class=middle></span>
                <span class=bottom></span>
            </div>
        </button>
    }
}
