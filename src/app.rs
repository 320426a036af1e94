//! SCINEX Frontend App
//!
//! Root component: provides context and maps paths to views.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{LandingPage, PromptPage, SignupPage};
use crate::routes::RouteLogger;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::local(config));

    view! {
        <Router>
            <RouteLogger />
            // Unrouted paths (including /login) render nothing; RouteLogger warns.
            // `path!` needs literals: keep these in step with `AppRoute::path`.
            <Routes fallback=|| ()>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route path=path!("/prompt") view=PromptPage />
            </Routes>
        </Router>
    }
}
