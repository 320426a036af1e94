//! Local stub backend: logs payloads, never reaches a service.

use async_trait::async_trait;

use super::Backend;
use crate::error::ApiResult;
use crate::models::{ChatRequest, ChatResponse, SignupRequest};

#[derive(Debug, Clone, Default)]
pub struct LocalBackend {
    /// Artificial delay before each reply (0 = resolve immediately)
    latency_ms: u32,
}

impl LocalBackend {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }

    async fn simulate_latency(&self) {
        if self.latency_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        }
    }
}

#[async_trait(?Send)]
impl Backend for LocalBackend {
    async fn create_account(&self, request: &SignupRequest) -> ApiResult<()> {
        self.simulate_latency().await;
        log::info!("Form submitted: {:?}", request);
        Ok(())
    }

    async fn send_message(&self, request: &ChatRequest) -> ApiResult<Option<ChatResponse>> {
        self.simulate_latency().await;
        log::info!("Message sent: {}", request.message);
        Ok(None)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_backend_accepts_everything() {
        let backend = LocalBackend::default();
        let req = ChatRequest { message: "hello".to_string() };
        assert_eq!(backend.send_message(&req).await, Ok(None));

        let signup = SignupRequest {
            full_name: "A".to_string(),
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            confirm_password: "y".to_string(),
        };
        assert_eq!(backend.create_account(&signup).await, Ok(()));
    }
}
