// src/llm/client.rs

//! The provider-agnostic client contract.

// dependencies
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// A completed response from a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Generated text.
    pub text: String,
    /// Provider payload, when the provider returns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

impl LlmResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw: None,
        }
    }
}

/// Contract every provider client implements.
///
/// Clients are shared across threads through `Arc<dyn LlmClient>`, so
/// implementors must be `Send + Sync`.
pub trait LlmClient: Send + Sync {
    /// Stable provider identifier, e.g. `"openai"`.
    fn provider_name(&self) -> &str;

    /// Model the client sends prompts to.
    fn model(&self) -> &str;

    fn complete(&self, prompt: &str) -> Result<LlmResponse>;

    /// Stream the completion in chunks.
    ///
    /// The default yields the whole completion as a single chunk.
    fn stream(&self, prompt: &str) -> Result<Vec<String>> {
        Ok(vec![self.complete(prompt)?.text])
    }
}

// lets registry handles (`Arc<dyn LlmClient>`) be wrapped like concrete clients
impl<T> LlmClient for Arc<T>
where
    T: LlmClient + ?Sized,
{
    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }

    fn model(&self) -> &str {
        (**self).model()
    }

    fn complete(&self, prompt: &str) -> Result<LlmResponse> {
        (**self).complete(prompt)
    }

    fn stream(&self, prompt: &str) -> Result<Vec<String>> {
        (**self).stream(prompt)
    }
}

/// Truncate `prompt` to at most `max_chars` characters for display in stub
/// responses. Never splits a UTF-8 code point.
pub(crate) fn preview(prompt: &str, max_chars: usize) -> &str {
    match prompt.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &prompt[..byte_index],
        None => prompt,
    }
}
