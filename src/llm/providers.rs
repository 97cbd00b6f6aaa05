// src/llm/providers.rs

//! Offline stub providers. Neither client performs network I/O; `complete`
//! echoes a tagged preview of the prompt.

// dependencies
use tracing::debug;

use super::client::{LlmClient, LlmResponse, preview};
use crate::errors::Result;

/// Characters of the prompt echoed back by the stubs.
const PREVIEW_CHARS: usize = 60;

/// Stub client for OpenAI GPT models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GptClient {
    model: String,
}

impl GptClient {
    pub const PROVIDER: &'static str = "openai";
    pub const DEFAULT_MODEL: &'static str = "gpt-4o";

    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl Default for GptClient {
    fn default() -> Self {
        Self::with_model(Self::DEFAULT_MODEL)
    }
}

impl LlmClient for GptClient {
    fn provider_name(&self) -> &str {
        Self::PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn complete(&self, prompt: &str) -> Result<LlmResponse> {
        debug!(provider = Self::PROVIDER, model = %self.model, prompt_chars = prompt.chars().count(), "Completing prompt");
        Ok(LlmResponse::new(format!(
            "[GPT:{}] {}...",
            self.model,
            preview(prompt, PREVIEW_CHARS)
        )))
    }
}

/// Stub client for Anthropic Claude models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudeClient {
    model: String,
}

impl ClaudeClient {
    pub const PROVIDER: &'static str = "anthropic";
    pub const DEFAULT_MODEL: &'static str = "claude-3-opus-20240229";

    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl Default for ClaudeClient {
    fn default() -> Self {
        Self::with_model(Self::DEFAULT_MODEL)
    }
}

impl LlmClient for ClaudeClient {
    fn provider_name(&self) -> &str {
        Self::PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn complete(&self, prompt: &str) -> Result<LlmResponse> {
        debug!(provider = Self::PROVIDER, model = %self.model, prompt_chars = prompt.chars().count(), "Completing prompt");
        Ok(LlmResponse::new(format!(
            "[Claude:{}] {}...",
            self.model,
            preview(prompt, PREVIEW_CHARS)
        )))
    }
}
