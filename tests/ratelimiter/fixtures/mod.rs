// tests/ratelimiter/fixtures/mod.rs

pub mod test_clock;
