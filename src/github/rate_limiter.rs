use crate::github::models::RateLimit;
use reqwest::header::HeaderMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Last rate-limit quota reported by the GitHub API
///
/// Every completed exchange overwrites the stored snapshot, so concurrent
/// requests resolve last-writer-wins. Clones share the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct RateLimitTracker {
    state: Arc<RwLock<Option<RateLimit>>>,
}

impl RateLimitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot from GitHub API response headers.
    /// Responses without a complete set of headers leave it untouched.
    pub fn update_from_headers(&self, headers: &HeaderMap) {
        let Some(rate) = parse_headers(headers) else {
            debug!("Response carried no rate limit headers");
            return;
        };

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = Some(rate);

        debug!(
            "Rate limit updated: {}/{} (used {}, resets at {})",
            rate.remaining, rate.limit, rate.used, rate.reset
        );
    }

    /// Get current rate limit status; `None` until the first response arrives
    pub fn get(&self) -> Option<RateLimit> {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }
}

fn parse_headers(headers: &HeaderMap) -> Option<RateLimit> {
    fn header<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse().ok())
    }

    let limit: u32 = header(headers, "x-ratelimit-limit")?;
    let remaining: u32 = header(headers, "x-ratelimit-remaining")?;
    let reset = header(headers, "x-ratelimit-reset")?;

    // Older GitHub Enterprise servers omit x-ratelimit-used
    let used = header(headers, "x-ratelimit-used").unwrap_or(limit.saturating_sub(remaining));

    Some(RateLimit {
        limit,
        remaining,
        reset,
        used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(limit: &str, remaining: &str, reset: &str, used: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert("x-ratelimit-limit", HeaderValue::from_str(limit).unwrap());
        map.insert("x-ratelimit-remaining", HeaderValue::from_str(remaining).unwrap());
        map.insert("x-ratelimit-reset", HeaderValue::from_str(reset).unwrap());
        map.insert("x-ratelimit-used", HeaderValue::from_str(used).unwrap());
        map
    }

    #[test]
    fn test_unknown_until_first_update() {
        let tracker = RateLimitTracker::new();
        assert!(tracker.get().is_none());
    }

    #[test]
    fn test_latest_headers_win() {
        let tracker = RateLimitTracker::new();
        tracker.update_from_headers(&headers("60", "59", "1700000000", "1"));
        tracker.update_from_headers(&headers("60", "58", "1700000000", "2"));
        tracker.update_from_headers(&headers("5000", "4999", "1700003600", "1"));

        assert_eq!(
            tracker.get(),
            Some(RateLimit {
                limit: 5000,
                remaining: 4999,
                reset: 1_700_003_600,
                used: 1,
            })
        );
    }

    #[test]
    fn test_missing_headers_keep_snapshot() {
        let tracker = RateLimitTracker::new();
        tracker.update_from_headers(&headers("60", "42", "1700000000", "18"));
        tracker.update_from_headers(&HeaderMap::new());

        assert_eq!(tracker.get().map(|r| r.remaining), Some(42));
    }

    #[test]
    fn test_partial_or_garbage_headers_ignored() {
        let tracker = RateLimitTracker::new();

        let mut partial = HeaderMap::new();
        partial.insert("x-ratelimit-limit", HeaderValue::from_static("60"));
        tracker.update_from_headers(&partial);
        assert!(tracker.get().is_none());

        tracker.update_from_headers(&headers("sixty", "1", "1700000000", "59"));
        assert!(tracker.get().is_none());
    }

    #[test]
    fn test_missing_used_header_still_replaces() {
        let tracker = RateLimitTracker::new();
        tracker.update_from_headers(&headers("60", "50", "1700000000", "10"));

        let mut without_used = headers("60", "3", "1700003600", "0");
        without_used.remove("x-ratelimit-used");
        tracker.update_from_headers(&without_used);

        assert_eq!(
            tracker.get(),
            Some(RateLimit {
                limit: 60,
                remaining: 3,
                reset: 1_700_003_600,
                used: 57,
            })
        );
    }

    #[test]
    fn test_clones_share_snapshot() {
        let tracker = RateLimitTracker::new();
        let clone = tracker.clone();
        clone.update_from_headers(&headers("60", "10", "1700000000", "50"));

        assert_eq!(tracker.get().map(|r| r.used), Some(50));
        assert!(RateLimitTracker::new().get().is_none());
    }
}
