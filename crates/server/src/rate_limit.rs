use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

/// Sliding window rate limit state shared across requests.
#[derive(Clone)]
pub struct RateLimitState {
    inner: Arc<Mutex<RateLimitInner>>,
}

struct RateLimitInner {
    /// Map from client key -> list of attempt timestamps.
    attempts: HashMap<String, Vec<Instant>>,
    /// Maximum attempts allowed within the window.
    max_attempts: usize,
    /// Sliding window duration.
    window: Duration,
}

impl RateLimitState {
    /// Create rate limiter allowing `max_attempts` per `window`.
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimitInner {
                attempts: HashMap::new(),
                max_attempts,
                window,
            })),
        }
    }

    /// Record an attempt for `key`. Returns false when the key is over its limit,
    /// in which case the attempt is not recorded.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let Ok(mut inner) = self.inner.lock() else {
            return true;
        };
        let window = inner.window;
        let max = inner.max_attempts;

        let timestamps = inner.attempts.entry(key.to_string()).or_default();
        timestamps.retain(|t| now.saturating_duration_since(*t) < window);

        if timestamps.len() >= max {
            return false;
        }

        timestamps.push(now);
        true
    }

    /// Forget attempts for `key`, e.g. after a successful sign-in.
    pub fn reset(&self, key: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.attempts.remove(key);
        }
    }
}

/// Limiter key for a sign-in email: trimmed and lowercased so case variants
/// share one budget.
pub fn sign_in_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Process-wide limiter for password sign-in, sized from `[sign_in]` in config.
pub fn sign_in_limiter() -> &'static RateLimitState {
    static LIMITER: OnceLock<RateLimitState> = OnceLock::new();
    LIMITER.get_or_init(|| {
        let config = crate::config::sign_in_config();
        RateLimitState::new(config.max_attempts, Duration::from_secs(config.window_secs))
    })
}
