//! Signup Page
//!
//! Account form. Native `required` / `type=email` checks gate submission;
//! the submit handler re-checks, logs, and hands the payload to the backend.
//! No navigation happens on submit.

use leptos::prelude::*;
use leptos_disclosure::{create_disclosure, Visibility};
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;

use crate::commands::dispatch;
use crate::components::{BrandMark, FormInput, PasswordInput};
use crate::context::use_app_context;
use crate::routes::{use_route_navigate, AppRoute, LOGIN_PATH};
use crate::signup_form::{SignupField, SignupForm, SubmitStatus, Submission};

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_route_navigate();
    let navigate_raw = use_navigate();

    let form = Store::new(SignupForm::default());
    let reveal_password = create_disclosure("reveal-password", Visibility::Closed);
    let reveal_confirm = create_disclosure("reveal-confirm", Visibility::Closed);
    let submission = RwSignal::new(Submission::default());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.with_untracked(|f| {
            submission.try_update(|s| s.begin(f)).flatten()
        }) else {
            return;
        };
        log::debug!("[signup] submitting {:?}", request);

        let backend = ctx.backend.clone();
        dispatch(
            async move { backend.create_account(&request).await },
            move |result| submission.update(|s| s.finish(result)),
        );
    };

    let status_line = move || match submission.with(|s| s.status().clone()) {
        SubmitStatus::Idle => None,
        SubmitStatus::Pending => Some(("text-sm text-gray-400", "Creating account...".to_string())),
        SubmitStatus::Accepted => Some(("text-sm text-green-400", "Thanks! Your details were received.".to_string())),
        SubmitStatus::Failed(message) => Some(("text-sm text-red-400", message)),
    };

    view! {
        <div class="min-h-screen bg-black text-white relative overflow-hidden flex items-center justify-center">
            <div class="absolute inset-0 bg-grid-pattern opacity-20"></div>
            <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-gradient-radial from-purple-600/20 to-transparent blur-3xl"></div>
            <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-gradient-radial from-blue-600/20 to-transparent blur-3xl"></div>

            <nav class="absolute top-0 left-0 right-0 z-10 flex items-center justify-between px-8 py-6">
                <button
                    class="cursor-pointer flex items-center space-x-2 hover:opacity-80 transition"
                    on:click=move |_| navigate(AppRoute::Landing)
                >
                    <BrandMark />
                </button>

                <div class="flex items-center space-x-4">
                    <span class="text-gray-400">"Already have an account?"</span>
                    <button
                        class="cursor-pointer text-white hover:text-gray-300 transition font-medium"
                        on:click=move |_| navigate_raw(LOGIN_PATH, Default::default())
                    >
                        "Login"
                    </button>
                </div>
            </nav>

            <div class="relative z-10 w-full max-w-md px-6">
                <div class="bg-gray-900/50 backdrop-blur-xl border border-gray-800 rounded-2xl p-8 shadow-2xl">
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-bold mb-2">"Create Account"</h1>
                        <p class="text-gray-400">"Join us and Figure Out Your Problems"</p>
                    </div>

                    <form class="space-y-5" on:submit=handle_submit>
                        <FormInput field=SignupField::FullName store=form placeholder="Enter your full name" />
                        <FormInput field=SignupField::Email store=form input_type="email" placeholder="Enter your email" />
                        <PasswordInput
                            field=SignupField::Password
                            store=form
                            reveal=reveal_password
                            placeholder="Create a password"
                        />
                        <PasswordInput
                            field=SignupField::ConfirmPassword
                            store=form
                            reveal=reveal_confirm
                            placeholder="Confirm your password"
                        />

                        <div class="flex items-start space-x-2">
                            <input
                                type="checkbox"
                                id="terms"
                                required
                                class="mt-1 w-4 h-4 bg-black/50 border border-gray-700 rounded focus:outline-none focus:ring-2 focus:ring-white"
                            />
                            <label for="terms" class="text-sm text-gray-400">
                                "I agree to the "
                                <a href="/terms" class="text-white hover:underline">"Terms of Service"</a>
                                " and "
                                <a href="/privacy" class="text-white hover:underline">"Privacy Policy"</a>
                            </label>
                        </div>

                        <button
                            type="submit"
                            class="w-full bg-white text-black font-semibold py-3 rounded-lg hover:bg-gray-200 transition duration-200 disabled:opacity-60"
                            disabled=move || submission.with(Submission::is_pending)
                        >
                            "Create Account"
                        </button>

                        {move || status_line().map(|(class, text)| view! {
                            <p class=class role="status">{text}</p>
                        })}
                    </form>

                    <div class="flex items-center my-6">
                        <div class="flex-1 border-t border-gray-700"></div>
                        <span class="px-4 text-sm text-gray-400">"Or continue with"</span>
                        <div class="flex-1 border-t border-gray-700"></div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        {["Google", "GitHub"]
                            .into_iter()
                            .map(|provider| view! {
                                <button
                                    type="button"
                                    class="flex items-center justify-center space-x-2 px-4 py-3 bg-black/50 border border-gray-700 rounded-lg hover:bg-gray-800 transition"
                                >
                                    <span class="text-sm">{provider}</span>
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>

                <p class="text-center text-gray-400 text-sm mt-6">
                    "By signing up, you agree to our Terms and Privacy Policy"
                </p>
            </div>
        </div>
    }
}
