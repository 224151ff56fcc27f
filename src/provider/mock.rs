//! Scripted chat backend for tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{ChatBackend, ProviderError};

/// In-memory [`ChatBackend`] that replays a script of responses.
///
/// Pops the next scripted response per call; once the script is exhausted
/// (or was never set) every call returns the fallback text.
#[derive(Debug)]
pub struct MockChat {
    script: Mutex<VecDeque<String>>,
    fallback: String,
}

impl MockChat {
    /// Backend that always answers with the same text.
    pub fn fixed(reply: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: reply.into(),
        }
    }

    /// Backend that replays `replies` in order, then falls back.
    pub fn scripted<I, S>(replies: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Mutex::new(replies.into_iter().map(Into::into).collect()),
            fallback: fallback.into(),
        }
    }
}

#[async_trait]
impl ChatBackend for MockChat {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        let next = self.script.lock().pop_front();
        Ok(next.unwrap_or_else(|| self.fallback.clone()))
    }
}
