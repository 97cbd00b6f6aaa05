// src/rate_limiter.rs

// prompt-limiter: a blocking sliding-window rate limiter.

// dependencies
use crate::clock::{Clock, SystemClock};
use crate::config::RateLimiterConfig;
use crate::errors::Result;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, trace};

/// The main RateLimiter model.
/// Admits at most `rate` events per sliding window of `per`: any `rate + 1`
/// consecutive admissions are at least `per` apart.
/// C is the clock type, defaulting to SystemClock.
/// The deque holds the admission instants of the last `rate` events (oldest
/// first); instants of callers still sleeping lie in the future. It sits in a
/// `Mutex` so a single limiter can be shared between threads (e.g. behind an
/// `Arc`). The lock is never held while sleeping.
#[derive(Debug)]
pub struct RateLimiter<C = SystemClock>
where
    C: Clock,
{
    rate: usize,
    per_nanos: u64,
    events: Mutex<VecDeque<u64>>,
    clock: C,
}

impl RateLimiter<SystemClock> {
    /// Create a limiter admitting `rate` events per `per_seconds` on the system clock.
    pub fn new(rate: usize, per_seconds: f64) -> Result<Self> {
        Self::with_config(RateLimiterConfig::new(rate, per_seconds), SystemClock::new())
    }
}

// methods for the RateLimiter type
impl<C> RateLimiter<C>
where
    C: Clock,
{
    // method to create a new rate limiter from a config object
    pub fn with_config(config: RateLimiterConfig, clock: C) -> Result<Self> {
        config.validate()?;
        let per_nanos = u64::try_from(config.window().as_nanos()).unwrap_or(u64::MAX);

        Ok(Self {
            rate: config.rate,
            per_nanos,
            events: Mutex::new(VecDeque::with_capacity(config.rate + 1)),
            clock,
        })
    }

    // accessor method to return the maximum number of events per window
    pub fn rate(&self) -> usize {
        self.rate
    }

    // accessor method to return the window duration
    pub fn per(&self) -> Duration {
        Duration::from_nanos(self.per_nanos)
    }

    /// Number of admission instants currently recorded, never more than `rate`.
    /// Stale entries are only evicted by `acquire`/`try_acquire`, so this may
    /// include expired events.
    pub fn recorded(&self) -> usize {
        self.events.lock().len()
    }

    /// Block until an event may be admitted, then return.
    ///
    /// Under the lock the caller evicts stale instants and reserves the
    /// earliest instant that keeps the window within `rate`: `now` if a slot
    /// is free, otherwise the moment the oldest of the last `rate` events is
    /// a full window old. The reservation is recorded before the lock is
    /// released, then the caller sleeps until it without re-checking.
    /// Concurrent callers therefore queue up on successive reservations.
    pub fn acquire(&self) {
        let (now, admitted_at) = {
            let mut events = self.events.lock();
            let now = self.clock.now();
            self.evict_stale(&mut events, now);
            let admitted_at = self.admission_time(&events, now);
            self.record(&mut events, admitted_at);
            (now, admitted_at)
        };

        let sleep_nanos = admitted_at - now;
        if sleep_nanos > 0 {
            debug!(
                rate = self.rate,
                sleep_ms = sleep_nanos as f64 / 1_000_000.0,
                "Rate limit reached, waiting for window to slide"
            );
            self.clock.sleep(Duration::from_nanos(sleep_nanos));
        }
        trace!("Event admitted");
    }

    /// Admit an event only if it can be admitted without waiting.
    ///
    /// Never sleeps, and the lock is only held for bookkeeping. Denied
    /// attempts record nothing and report how long until a slot frees up.
    pub fn try_acquire(&self) -> AcquireDecision {
        let mut events = self.events.lock();
        let now = self.clock.now();
        self.evict_stale(&mut events, now);

        let admitted_at = self.admission_time(&events, now);
        if admitted_at == now {
            self.record(&mut events, now);
            AcquireDecision {
                allowed: true,
                retry_after: None,
                remaining: self.rate.saturating_sub(self.occupied(&events, now)),
            }
        } else {
            let wait_nanos = admitted_at - now;
            trace!(
                recorded = events.len(),
                retry_after_ms = wait_nanos as f64 / 1_000_000.0,
                "Event denied"
            );

            AcquireDecision {
                allowed: false,
                retry_after: Some(Duration::from_nanos(wait_nanos)),
                remaining: 0,
            }
        }
    }

    // drop every timestamp strictly older than the window
    fn evict_stale(&self, events: &mut VecDeque<u64>, now: u64) {
        while let Some(&front) = events.front() {
            if now.saturating_sub(front) > self.per_nanos {
                events.pop_front();
            } else {
                break;
            }
        }
    }

    // earliest instant >= now at which one more event keeps every window of
    // `per` within `rate` events
    fn admission_time(&self, events: &VecDeque<u64>, now: u64) -> u64 {
        if events.len() < self.rate {
            return now;
        }
        let kth_most_recent = events[events.len() - self.rate];
        now.max(kth_most_recent.saturating_add(self.per_nanos))
    }

    // append an admission instant, keeping only the last `rate`
    fn record(&self, events: &mut VecDeque<u64>, admitted_at: u64) {
        events.push_back(admitted_at);
        while events.len() > self.rate {
            events.pop_front();
        }
    }

    // events still occupying the window at `now`, reservations included
    fn occupied(&self, events: &VecDeque<u64>, now: u64) -> usize {
        events
            .iter()
            .filter(|&&t| now.saturating_sub(t) < self.per_nanos)
            .count()
    }
}

/// Result of a non-blocking admission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquireDecision {
    /// Whether the event was admitted and recorded
    pub allowed: bool,
    /// How long until a slot frees up (when denied)
    pub retry_after: Option<Duration>,
    /// Slots left in the current window after this attempt
    pub remaining: usize,
}
