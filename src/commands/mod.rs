//! Backend Request Seam
//!
//! Views hand validated payloads to a `Backend` and get the outcome back
//! through a callback. The shipped `LocalBackend` only logs; a service client
//! implements the same trait.

mod local;

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use leptos::task::spawn_local;

use crate::error::ApiResult;
use crate::models::{ChatRequest, ChatResponse, SignupRequest};

pub use local::LocalBackend;

/// Account and chat services
///
/// Futures are not `Send`: they run on the browser's single event loop.
#[async_trait(?Send)]
pub trait Backend: Send + Sync {
    /// Create an account from a validated signup payload
    async fn create_account(&self, request: &SignupRequest) -> ApiResult<()>;

    /// Send a non-empty, trimmed chat message.
    /// `None` means the message was accepted without a completion.
    async fn send_message(&self, request: &ChatRequest) -> ApiResult<Option<ChatResponse>>;
}

pub type SharedBackend = Arc<dyn Backend>;

/// Run `request` on the local executor and hand its result to `on_result`
pub fn dispatch<T, Fut, C>(request: Fut, on_result: C)
where
    T: 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
    C: FnOnce(ApiResult<T>) + 'static,
{
    spawn_local(async move {
        let result = request.await;
        if let Err(e) = &result {
            log::error!("[commands] request failed: {}", e);
        }
        on_result(result);
    });
}
