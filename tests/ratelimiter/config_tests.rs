// tests/ratelimiter/config_tests.rs

#[cfg(test)]
mod tests {
    use crate::fixtures::test_clock::TestClock;
    use prompt_limiter::{Error, RateLimiter, RateLimiterConfig};
    use std::time::Duration;

    // Config validation tests
    #[test]
    fn config_rejects_zero_rate() {
        let config = RateLimiterConfig::new(0, 1.0);
        let result = config.validate();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::InvalidRate));
    }

    #[test]
    fn config_rejects_zero_window() {
        let config = RateLimiterConfig::new(1, 0.0);
        assert!(matches!(config.validate().unwrap_err(), Error::InvalidWindow));
    }

    #[test]
    fn config_rejects_negative_window() {
        let config = RateLimiterConfig::new(1, -1.0);
        assert!(matches!(config.validate().unwrap_err(), Error::InvalidWindow));
    }

    #[test]
    fn config_rejects_non_finite_window() {
        for per in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = RateLimiterConfig::new(1, per);
            assert!(
                matches!(config.validate(), Err(Error::InvalidWindow)),
                "window {} should be rejected",
                per
            );
        }
    }

    #[test]
    fn config_accepts_valid_parameters() {
        let config = RateLimiterConfig::new(10, 0.5);
        assert!(config.validate().is_ok());
    }

    // Test config builder pattern
    #[test]
    fn config_builder_pattern_works() {
        let config = RateLimiterConfig::new(0, 0.0).rate(5).per(0.5);

        assert!(config.validate().is_ok());

        let clock = TestClock::new(0.0);
        let limiter = RateLimiter::with_config(config, clock).unwrap();
        assert_eq!(limiter.rate(), 5);
        assert_eq!(limiter.per(), Duration::from_millis(500));
    }

    // Constructor tests with config
    #[test]
    fn constructor_with_invalid_config_fails() {
        let clock = TestClock::new(0.0);
        let config = RateLimiterConfig::new(0, 1.0);
        let result = RateLimiter::with_config(config, clock);
        assert!(matches!(result, Err(Error::InvalidRate)));
    }

    #[test]
    fn system_clock_constructor_validates() {
        assert!(matches!(RateLimiter::new(0, 1.0), Err(Error::InvalidRate)));
        assert!(matches!(RateLimiter::new(1, -0.5), Err(Error::InvalidWindow)));

        let limiter = RateLimiter::new(2, 1.0).unwrap();
        assert_eq!(limiter.rate(), 2);
        assert_eq!(limiter.per(), Duration::from_secs(1));
        assert_eq!(limiter.recorded(), 0);
    }

    #[test]
    fn error_display_formatting() {
        let message = RateLimiterConfig::new(0, 1.0).validate().unwrap_err().to_string();
        assert!(message.to_lowercase().contains("rate"));

        let message = RateLimiterConfig::new(1, 0.0).validate().unwrap_err().to_string();
        assert!(message.to_lowercase().contains("window"));
    }
}
