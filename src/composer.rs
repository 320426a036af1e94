//! Prompt Composer State
//!
//! Draft text, the in-flight flag and the session transcript for the prompt
//! view. A send is split in two halves around the backend request:
//! `begin_send` decides whether anything goes out, `finish_send` applies the
//! outcome.

use crate::error::ApiResult;
use crate::models::{ChatRequest, ChatResponse, ChatTurn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    draft: String,
    /// Trimmed text of the request currently in flight
    pending: Option<String>,
    transcript: Vec<ChatTurn>,
    next_turn_id: u32,
    last_error: Option<String>,
}

impl Composer {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whitespace-only drafts, and sends while one is in flight, yield `None`
    /// and leave the state untouched.
    pub fn begin_send(&mut self) -> Option<ChatRequest> {
        if self.pending.is_some() {
            return None;
        }
        let message = self.draft.trim();
        if message.is_empty() {
            return None;
        }
        let message = message.to_string();
        self.pending = Some(message.clone());
        self.last_error = None;
        Some(ChatRequest { message })
    }

    /// Success clears the draft and records the turn; failure keeps the draft.
    pub fn finish_send(&mut self, result: ApiResult<Option<ChatResponse>>) {
        let Some(prompt) = self.pending.take() else {
            return;
        };
        match result {
            Ok(reply) => {
                self.draft.clear();
                self.transcript.push(ChatTurn {
                    id: self.next_turn_id,
                    prompt,
                    reply: reply.map(|r| r.response),
                });
                self.next_turn_id += 1;
            }
            Err(e) => self.last_error = Some(e.user_message()),
        }
    }

    /// Start a new chat: empty draft, empty transcript.
    /// Ignored while a send is pending; the view disables "New chat" then.
    pub fn reset(&mut self) {
        if self.pending.is_none() {
            *self = Self::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_whitespace_draft_is_not_sent() {
        let mut composer = Composer::default();
        composer.set_draft("   ".to_string());
        assert_eq!(composer.begin_send(), None);
        assert_eq!(composer.draft(), "   ");
        assert!(!composer.is_pending());
    }

    #[test]
    fn test_send_is_trimmed_and_clears_on_success() {
        let mut composer = Composer::default();
        composer.set_draft("  hello \n".to_string());
        let req = composer.begin_send().unwrap();
        assert_eq!(req.message, "hello");
        assert_eq!(composer.draft(), "  hello \n");

        composer.finish_send(Ok(None));
        assert_eq!(composer.draft(), "");
        assert_eq!(composer.transcript().len(), 1);
        assert_eq!(composer.transcript()[0].prompt, "hello");
        assert_eq!(composer.transcript()[0].reply, None);
    }

    #[test]
    fn test_second_send_blocked_while_pending() {
        let mut composer = Composer::default();
        composer.set_draft("one".to_string());
        assert!(composer.begin_send().is_some());
        assert_eq!(composer.begin_send(), None);
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut composer = Composer::default();
        composer.set_draft("hello".to_string());
        composer.begin_send();
        composer.finish_send(Err(ApiError::Unavailable("offline".to_string())));
        assert_eq!(composer.draft(), "hello");
        assert!(composer.transcript().is_empty());
        assert!(composer.last_error().is_some());
        assert!(!composer.is_pending());
    }

    #[test]
    fn test_reply_is_recorded() {
        let mut composer = Composer::default();
        composer.set_draft("hi".to_string());
        composer.begin_send();
        composer.finish_send(Ok(Some(ChatResponse {
            response: "Hello!".to_string(),
            model_used: "m".to_string(),
            credits_remaining: 3,
        })));
        assert_eq!(composer.transcript()[0].reply.as_deref(), Some("Hello!"));
    }

    #[test]
    fn test_turn_ids_increase_and_reset_clears() {
        let mut composer = Composer::default();
        for text in ["a", "b"] {
            composer.set_draft(text.to_string());
            composer.begin_send();
            composer.finish_send(Ok(None));
        }
        let ids: Vec<u32> = composer.transcript().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);

        composer.set_draft("draft".to_string());
        composer.reset();
        assert_eq!(composer, Composer::default());
    }

    #[test]
    fn test_reset_ignored_while_pending() {
        let mut composer = Composer::default();
        composer.set_draft("in flight".to_string());
        composer.begin_send();
        let before = composer.clone();
        composer.reset();
        assert_eq!(composer, before);

        composer.finish_send(Ok(None));
        assert_eq!(composer.transcript().len(), 1);
        assert_eq!(composer.transcript()[0].prompt, "in flight");
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod with_backend {
        use super::*;
        use crate::commands::testing::RecordingBackend;
        use crate::commands::Backend;

        async fn submit(composer: &mut Composer, backend: &dyn Backend) {
            if let Some(req) = composer.begin_send() {
                let result = backend.send_message(&req).await;
                composer.finish_send(result);
            }
        }

        #[tokio::test]
        async fn test_whitespace_never_reaches_backend() {
            let backend = RecordingBackend::default();
            let mut composer = Composer::default();
            composer.set_draft("   ".to_string());
            submit(&mut composer, &backend).await;
            assert!(backend.message_log().is_empty());
            assert_eq!(composer.draft(), "   ");
        }

        #[tokio::test]
        async fn test_hello_sent_exactly_once() {
            let backend = RecordingBackend::default();
            let mut composer = Composer::default();
            composer.set_draft("hello".to_string());
            submit(&mut composer, &backend).await;
            assert_eq!(backend.message_log(), vec!["hello".to_string()]);
            assert_eq!(composer.draft(), "");
            assert_eq!(composer.transcript()[0].reply.as_deref(), Some("echo: hello"));
        }

        #[tokio::test]
        async fn test_backend_failure_keeps_draft() {
            let backend = RecordingBackend::failing(ApiError::Rejected("quota".to_string()));
            let mut composer = Composer::default();
            composer.set_draft("hello".to_string());
            submit(&mut composer, &backend).await;
            assert_eq!(backend.message_log().len(), 1);
            assert_eq!(composer.draft(), "hello");
            assert_eq!(composer.last_error(), Some("quota"));
        }
    }
}
