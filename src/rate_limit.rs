//! Retry hints for rate-limited responses.
//!
//! The service reports how long to back off in the JSON body (`retryAfter`, in
//! seconds). Proxies in front of it may only set the standard `Retry-After`
//! header, so that is consulted as a fallback.

use http::HeaderMap;
use std::time::{Duration, SystemTime};

/// Information extracted from a 429 response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateLimitInfo {
    /// How long to wait before retrying.
    pub retry_after: Option<Duration>,
}

impl RateLimitInfo {
    /// Extracts the retry hint from a response body and headers.
    ///
    /// The body's `retryAfter` field wins over the `Retry-After` header.
    ///
    /// # Examples
    ///
    /// ```
    /// use renamed::rate_limit::RateLimitInfo;
    /// use http::HeaderMap;
    /// use std::time::Duration;
    ///
    /// let body = serde_json::json!({"error": "Rate limit exceeded", "retryAfter": 60});
    /// let info = RateLimitInfo::from_response(Some(&body), &HeaderMap::new());
    /// assert_eq!(info.retry_after, Some(Duration::from_secs(60)));
    /// ```
    pub fn from_response(body: Option<&serde_json::Value>, headers: &HeaderMap) -> Self {
        let retry_after = body
            .and_then(parse_body_retry_after)
            .or_else(|| parse_retry_after_header(headers));

        Self { retry_after }
    }

    /// Returns the hinted delay capped by `max_wait`, if a hint was given.
    pub fn delay(&self, max_wait: Duration) -> Option<Duration> {
        self.retry_after.map(|d| d.min(max_wait))
    }
}

/// Reads `retryAfter` as whole or fractional seconds.
///
/// Negative, non-finite and out-of-range values are ignored.
fn parse_body_retry_after(body: &serde_json::Value) -> Option<Duration> {
    let seconds = body.get("retryAfter")?.as_f64()?;
    Duration::try_from_secs_f64(seconds).ok()
}

/// Parses the Retry-After header.
///
/// Supports both delay-seconds (integer) and HTTP-date formats.
fn parse_retry_after_header(headers: &HeaderMap) -> Option<Duration> {
    let header = headers.get(http::header::RETRY_AFTER)?.to_str().ok()?;

    if let Ok(seconds) = header.trim().parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    let date_time = httpdate::parse_http_date(header).ok()?;
    // A date in the past means "now".
    Some(
        date_time
            .duration_since(SystemTime::now())
            .unwrap_or(Duration::ZERO),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use serde_json::json;

    #[test]
    fn test_body_retry_after() {
        let body = json!({"error": "Rate limit exceeded", "retryAfter": 60});
        let info = RateLimitInfo::from_response(Some(&body), &HeaderMap::new());
        assert_eq!(info.retry_after, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_fractional_body_retry_after() {
        let body = json!({"retryAfter": 1.5});
        let info = RateLimitInfo::from_response(Some(&body), &HeaderMap::new());
        assert_eq!(info.retry_after, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_negative_body_retry_after_is_ignored() {
        let body = json!({"retryAfter": -3});
        let info = RateLimitInfo::from_response(Some(&body), &HeaderMap::new());
        assert_eq!(info.retry_after, None);
    }

    #[test]
    fn test_out_of_range_body_retry_after_is_ignored() {
        let body = json!({"retryAfter": 1e30});
        let info = RateLimitInfo::from_response(Some(&body), &HeaderMap::new());
        assert_eq!(info.retry_after, None);
    }

    #[test]
    fn test_header_fallback_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("30"));

        let body = json!({"error": "Rate limit exceeded"});
        let info = RateLimitInfo::from_response(Some(&body), &headers);
        assert_eq!(info.retry_after, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_body_wins_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("30"));

        let body = json!({"retryAfter": 5});
        let info = RateLimitInfo::from_response(Some(&body), &headers);
        assert_eq!(info.retry_after, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_header_http_date() {
        let future = SystemTime::now() + Duration::from_secs(120);
        let mut headers = HeaderMap::new();
        headers.insert(
            "retry-after",
            HeaderValue::from_str(&httpdate::fmt_http_date(future)).unwrap(),
        );

        let info = RateLimitInfo::from_response(None, &headers);
        let delay = info.retry_after.expect("date should parse");
        assert!(delay > Duration::from_secs(100) && delay <= Duration::from_secs(120));
    }

    #[test]
    fn test_no_hint() {
        let info = RateLimitInfo::from_response(None, &HeaderMap::new());
        assert_eq!(info.retry_after, None);
        assert_eq!(info.delay(Duration::from_secs(10)), None);
    }

    #[test]
    fn test_delay_capped_by_max_wait() {
        let info = RateLimitInfo {
            retry_after: Some(Duration::from_secs(600)),
        };
        assert_eq!(
            info.delay(Duration::from_secs(60)),
            Some(Duration::from_secs(60))
        );
    }
}
