// src/lib.rs

//! # Prompt Limiter
//!
//! Scaffolding for calling LLM providers: a blocking sliding-window rate
//! limiter, a provider-agnostic client contract with offline stub providers,
//! prompt templating and chaining helpers, a prompt cache and logging setup.
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//! use prompt_limiter::RateLimiter;
//! use prompt_limiter::llm::{GptClient, LlmClient, RateLimitedClient};
//!
//! // at most 2 completions per second
//! let limiter = Arc::new(RateLimiter::new(2, 1.0).unwrap());
//! let client = RateLimitedClient::new(GptClient::default(), limiter);
//!
//! let response = client.complete("Hello world").unwrap();
//! assert_eq!(response.text, "[GPT:gpt-4o] Hello world...");
//! ```

// private modules
mod cache;
mod clock;
mod config;
mod errors;
mod rate_limiter;

// public modules
pub mod llm;
pub mod logging;
pub mod prompt;

// public API exports
pub use cache::{DEFAULT_PROMPT_CACHE_CAPACITY, PromptCache};
pub use clock::{Clock, SystemClock};
pub use config::RateLimiterConfig;
pub use errors::{Error, Result};
pub use logging::{LoggingConfig, setup_logging};
pub use rate_limiter::{AcquireDecision, RateLimiter};
