//! Application Routes
//!
//! Typed view of the router's path. The router itself (leptos_router) owns
//! the navigation state; this module only names the routes and wraps
//! navigation so callers pass a route instead of a string.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// The mutually exclusive set of routed views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Signup,
    Prompt,
}

/// Referenced by the signup view, but no view is routed here
pub const LOGIN_PATH: &str = "/login";

impl AppRoute {
    pub const ALL: [AppRoute; 3] = [AppRoute::Landing, AppRoute::Signup, AppRoute::Prompt];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Signup => "/signup",
            AppRoute::Prompt => "/prompt",
        }
    }

    /// Exact match only; anything else has no route
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Navigation command taking a typed route
pub fn use_route_navigate() -> impl Fn(AppRoute) + Clone + 'static {
    let navigate = use_navigate();
    move |route: AppRoute| {
        navigate(route.path(), Default::default());
    }
}

/// Logs every path change. Must be mounted inside the `Router`.
#[component]
pub fn RouteLogger() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        let path = location.pathname.get();
        match AppRoute::from_path(&path) {
            Some(route) => log::debug!("[router] {} -> {:?}", path, route),
            None => log::warn!("[router] no route for {}", path),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Landing));
        assert_eq!(AppRoute::from_path("/signup"), Some(AppRoute::Signup));
        assert_eq!(AppRoute::from_path("/prompt"), Some(AppRoute::Prompt));
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }

    /// Same literals as the `Routes` block in `app.rs`
    #[test]
    fn test_paths_match_router_table() {
        let routed = ["/", "/signup", "/prompt"];
        let paths: Vec<&str> = AppRoute::ALL.into_iter().map(AppRoute::path).collect();
        assert_eq!(paths, routed);
    }

    #[test]
    fn test_unrouted_paths() {
        for path in [LOGIN_PATH, "/signup/", "/Prompt", "", "/terms", "/prompt?x=1"] {
            assert_eq!(AppRoute::from_path(path), None, "{path}");
        }
    }
}
