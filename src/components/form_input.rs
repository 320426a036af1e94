//! Form Input Component
//!
//! Labeled, required text input bound to one signup field.

use leptos::prelude::*;

use crate::signup_form::{handle_change, store_field_value, SignupField, SignupStore};

pub const INPUT_CLASS: &str = "w-full px-4 py-3 bg-black/50 border border-gray-700 rounded-lg focus:outline-none focus:border-white transition placeholder-gray-500";

/// Input handler that routes the value by the input's `name` attribute
pub fn on_field_input(store: SignupStore) -> impl Fn(web_sys::Event) + Copy + 'static {
    move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if !handle_change(&store, &input.name(), input.value()) {
            log::warn!("[signup] input with unknown name {:?}", input.name());
        }
    }
}

#[component]
pub fn FormInput(
    field: SignupField,
    store: SignupStore,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium mb-2">
                {field.label()}
            </label>
            <input
                type=input_type
                id=field.name()
                name=field.name()
                placeholder=placeholder
                required
                class=INPUT_CLASS
                prop:value=move || store_field_value(&store, field)
                on:input=on_field_input(store)
            />
        </div>
    }
}
