// src/llm/rate_limited.rs

// dependencies
use std::fmt;
use std::sync::Arc;

use super::client::{LlmClient, LlmResponse};
use crate::clock::{Clock, SystemClock};
use crate::errors::Result;
use crate::rate_limiter::RateLimiter;

/// Wraps a client so every completion first waits on a shared rate limiter.
///
/// Several clients may share one limiter to enforce a single provider-wide
/// quota.
pub struct RateLimitedClient<L, C = SystemClock>
where
    L: LlmClient,
    C: Clock,
{
    inner: L,
    limiter: Arc<RateLimiter<C>>,
}

impl<L, C> RateLimitedClient<L, C>
where
    L: LlmClient,
    C: Clock,
{
    pub fn new(inner: L, limiter: Arc<RateLimiter<C>>) -> Self {
        Self { inner, limiter }
    }

    pub fn limiter(&self) -> &Arc<RateLimiter<C>> {
        &self.limiter
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

// inner clients are often `Arc<dyn LlmClient>`, so identify them by provider and model
impl<L, C> fmt::Debug for RateLimitedClient<L, C>
where
    L: LlmClient,
    C: Clock + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateLimitedClient")
            .field("provider", &self.inner.provider_name())
            .field("model", &self.inner.model())
            .field("limiter", &self.limiter)
            .finish()
    }
}

impl<L, C> LlmClient for RateLimitedClient<L, C>
where
    L: LlmClient,
    C: Clock,
{
    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    fn complete(&self, prompt: &str) -> Result<LlmResponse> {
        self.limiter.acquire();
        self.inner.complete(prompt)
    }
}
