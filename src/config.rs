// src/config.rs

//! Configuration types for the rate limiter

// dependencies
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Configuration for rate limiter behavior
///
/// `rate` events are admitted per sliding window of `per_seconds` seconds.
/// Deserializes from e.g. `{ rate: 5, per_seconds: 0.5 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    pub(crate) rate: usize,
    pub(crate) per_seconds: f64,
}

impl RateLimiterConfig {
    /// Create a new configuration with rate and window settings
    pub fn new(rate: usize, per_seconds: f64) -> Self {
        Self { rate, per_seconds }
    }

    /// Builder-style: set maximum events per window
    pub fn rate(mut self, rate: usize) -> Self {
        self.rate = rate;
        self
    }

    /// Builder-style: set window duration in seconds
    pub fn per(mut self, per_seconds: f64) -> Self {
        self.per_seconds = per_seconds;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.rate == 0 {
            return Err(Error::InvalidRate);
        }
        // rejects negative, NaN, infinite and overflowing values; sub-nanosecond
        // windows round down to zero
        match Duration::try_from_secs_f64(self.per_seconds) {
            Ok(window) if !window.is_zero() => Ok(()),
            _ => Err(Error::InvalidWindow),
        }
    }

    pub(crate) fn window(&self) -> Duration {
        Duration::try_from_secs_f64(self.per_seconds).unwrap_or(Duration::ZERO)
    }
}
