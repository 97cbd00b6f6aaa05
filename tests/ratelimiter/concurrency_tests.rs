// tests/ratelimiter/concurrency_tests.rs

// These tests run against the real system clock and sleep for about a second
// at most.

#[cfg(test)]
mod tests {

    use parking_lot::Mutex;
    use prompt_limiter::RateLimiter;
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    // tolerance for nanosecond rounding between the two monotonic clocks
    const SLOP: Duration = Duration::from_millis(1);

    // tolerance for threads waking up late after their admission instant
    const JITTER: Duration = Duration::from_millis(50);

    #[test]
    fn overflow_call_blocks_for_the_window_on_real_time() {
        let limiter = RateLimiter::new(2, 0.2).unwrap();
        let start = Instant::now();

        limiter.acquire();
        limiter.acquire();
        let after_burst = start.elapsed();

        limiter.acquire();
        let after_overflow = start.elapsed();

        assert!(after_burst < Duration::from_millis(100));
        assert!(after_overflow + SLOP >= Duration::from_millis(200));
    }

    #[test]
    fn shared_limiter_throttles_all_threads() {
        let limiter = Arc::new(RateLimiter::new(3, 0.3).unwrap());
        let per = limiter.per();
        let completions = Arc::new(Mutex::new(Vec::new()));
        let start = Instant::now();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                let completions = Arc::clone(&completions);
                thread::spawn(move || {
                    for _ in 0..3 {
                        limiter.acquire();
                        completions.lock().push(Instant::now());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let mut completions = completions.lock().clone();
        completions.sort();
        assert_eq!(completions.len(), 12);

        // no four completions fit inside one window, up to wake-up jitter
        for window in completions.windows(4) {
            assert!(
                window[3] - window[0] + JITTER >= per,
                "four completions within {:?}",
                window[3] - window[0]
            );
        }
        // twelve admissions at three per window need three full windows
        assert!(start.elapsed() + SLOP >= per * 3);
        assert_eq!(limiter.recorded(), 3);
    }

    #[test]
    fn try_acquire_does_not_wait_for_a_sleeping_acquire() {
        let limiter = Arc::new(RateLimiter::new(1, 0.5).unwrap());
        let origin = Instant::now();
        limiter.acquire();

        let sleeper = {
            let limiter = Arc::clone(&limiter);
            thread::spawn(move || {
                limiter.acquire();
                Instant::now()
            })
        };
        // let the other thread reserve its slot and go to sleep
        thread::sleep(Duration::from_millis(50));

        let start = Instant::now();
        let decision = limiter.try_acquire();
        let recorded = limiter.recorded();
        let elapsed = start.elapsed();

        assert!(elapsed < Duration::from_millis(100), "try_acquire blocked for {:?}", elapsed);
        assert!(!decision.allowed);
        assert_eq!(recorded, 1);
        assert!(decision.retry_after.unwrap() > Duration::from_millis(400));

        let admitted = sleeper.join().unwrap();
        assert!(admitted - origin + SLOP >= Duration::from_millis(500));
    }

    #[test]
    fn limiter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RateLimiter>();
    }
}
