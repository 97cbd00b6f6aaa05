// src/llm/mod.rs

//! LLM client contract, offline stub providers, a memoizing registry and a
//! rate-limited client adapter.

mod client;
mod providers;
mod rate_limited;
mod registry;

pub use client::{LlmClient, LlmResponse};
pub use providers::{ClaudeClient, GptClient};
pub use rate_limited::RateLimitedClient;
pub use registry::{ClientRegistry, SUPPORTED_CLIENTS, get_client};
