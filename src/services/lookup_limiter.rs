use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::config::AppConfig;

const PRUNE_THRESHOLD: usize = 10_000;

/// Fixed-window request counter keyed by client address, guarding the
/// unauthenticated invoice lookup by reference number.
pub struct LookupLimiter {
    limit: u32,
    window: Duration,
    windows: DashMap<String, (Instant, u32)>,
}

impl LookupLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            windows: DashMap::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.lookup_rate_limit, config.lookup_rate_window)
    }

    pub fn check(&self, client: &str) -> bool {
        self.check_at(client, Instant::now())
    }

    /// Count one request for `client` at `now`; `false` once the client has
    /// used up its allowance for the current window.
    pub fn check_at(&self, client: &str, now: Instant) -> bool {
        if self.windows.len() > PRUNE_THRESHOLD {
            let window = self.window;
            self.windows
                .retain(|_, (started, _)| now.duration_since(*started) < window);
        }

        let mut entry = self.windows.entry(client.to_string()).or_insert((now, 0));
        let (started, count) = entry.value_mut();
        if now.duration_since(*started) >= self.window {
            *started = now;
            *count = 0;
        }

        if *count >= self.limit {
            log::warn!("Invoice lookup rate limit hit for {}", client);
            return false;
        }
        *count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_within_window() {
        let limiter = LookupLimiter::new(2, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.check_at("10.0.0.1", now));
        assert!(limiter.check_at("10.0.0.1", now + Duration::from_secs(1)));
        assert!(!limiter.check_at("10.0.0.1", now + Duration::from_secs(2)));
        // Other clients are counted separately.
        assert!(limiter.check_at("10.0.0.2", now + Duration::from_secs(2)));
    }

    #[test]
    fn test_window_resets() {
        let limiter = LookupLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.check_at("client", now));
        assert!(!limiter.check_at("client", now + Duration::from_secs(59)));
        assert!(limiter.check_at("client", now + Duration::from_secs(60)));
    }

    #[test]
    fn test_zero_limit_blocks_everything() {
        let limiter = LookupLimiter::new(0, Duration::from_secs(60));
        assert!(!limiter.check("client"));
    }
}
