// src/clock.rs

// clock module definition and implementations

// dependencies
use std::time::{Duration, Instant};

/// Clock trait to abstract time retrieval and thread suspension.
/// Implementors must be thread-safe (Send + Sync).
/// The `now` method returns monotonic time in nanoseconds as a u64, measured
/// from an arbitrary origin fixed for the lifetime of the clock.
/// The `sleep` method suspends the calling thread for the given duration.
/// The RateLimiter only ever talks to time through this trait, which lets tests
/// substitute a virtual clock whose `sleep` simply advances `now`.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;

    fn sleep(&self, duration: Duration);
}

/// SystemClock implementation backed by `std::time::Instant`.
/// Time is reported as nanoseconds elapsed since the clock was created, so it
/// never goes backwards even if the wall clock is adjusted.
/// This is the default clock used in the RateLimiter.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

// Make SystemClock the default
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // u64 nanoseconds covers ~584 years of uptime
        self.origin.elapsed().as_nanos() as u64
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
