use server::rate_limit::{sign_in_key, RateLimitState};
use std::time::Duration;

#[test]
fn sixth_sign_in_attempt_for_same_email_is_limited() {
    let limiter = RateLimitState::new(5, Duration::from_secs(300));
    for _ in 0..5 {
        assert!(limiter.check(&sign_in_key("Ana@Example.com")));
    }
    assert!(!limiter.check(&sign_in_key("ana@example.com ")));
    assert!(limiter.check(&sign_in_key("bia@example.com")));
}
