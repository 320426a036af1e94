//! Application Context
//!
//! Read-only app-wide values provided via Leptos Context API. Views share no
//! mutable state through here.

use std::sync::Arc;

use leptos::prelude::*;

use crate::commands::{LocalBackend, SharedBackend};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    /// Where signup and chat submissions go
    pub backend: SharedBackend,
}

impl AppContext {
    /// Context backed by the local stub
    pub fn local(config: AppConfig) -> Self {
        let backend: SharedBackend = Arc::new(LocalBackend::new(config.stub_latency_ms));
        Self {
            config: Arc::new(config),
            backend,
        }
    }

    pub fn brand(&self) -> String {
        self.config.brand.clone()
    }
}

/// Get the app context (provided by `App`)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
