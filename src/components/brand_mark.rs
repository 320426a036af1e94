//! Brand Mark Component
//!
//! Rotated-square logo plus the configured product name.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn BrandMark(
    /// Classes for the name label
    #[prop(into, default = "text-xl font-semibold ml-1.5".to_string())]
    label_class: String,
) -> impl IntoView {
    let brand = use_app_context().brand();

    view! {
        <div class="w-6 h-6 border-2 border-white rotate-45"></div>
        <span class=label_class>{brand}</span>
    }
}
