//! Password Input Component
//!
//! Required password field with its own reveal toggle. Each instance owns
//! a separate disclosure, so revealing one field never unmasks another.

use leptos::prelude::*;
use leptos_disclosure::{make_on_toggle, DisclosureSignals};

use super::form_input::{on_field_input, INPUT_CLASS};
use super::icons::{Icon, IconKind};
use crate::signup_form::{store_field_value, SignupField, SignupStore};

#[component]
pub fn PasswordInput(
    field: SignupField,
    store: SignupStore,
    /// Open = plain text, Closed = masked
    reveal: DisclosureSignals,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium mb-2">
                {field.label()}
            </label>
            <div class="relative">
                <input
                    type=move || if reveal.is_open() { "text" } else { "password" }
                    id=field.name()
                    name=field.name()
                    placeholder=placeholder
                    required
                    class=INPUT_CLASS
                    prop:value=move || store_field_value(&store, field)
                    on:input=on_field_input(store)
                />
                <button
                    type="button"
                    class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-white transition"
                    aria-label=move || if reveal.is_open() { "Hide password" } else { "Show password" }
                    on:click=make_on_toggle(reveal)
                >
                    {move || {
                        let kind = if reveal.is_open() { IconKind::EyeOff } else { IconKind::Eye };
                        view! { <Icon kind=kind /> }
                    }}
                </button>
            </div>
        </div>
    }
}
