//! Successful API responses along with the details of how they were obtained.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A parsed 2xx response.
///
/// Endpoint methods such as [`Client::get_user`](crate::Client::get_user) return
/// only the parsed data. [`Client::call`](crate::Client::call) and the generic
/// verb helpers return this wrapper so callers can inspect latency, retry count
/// and the raw body.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The parsed response body.
    pub data: T,

    /// The raw response body.
    pub raw_body: String,

    /// The HTTP status code of the final attempt.
    pub status: StatusCode,

    /// The headers of the final attempt.
    pub headers: HeaderMap,

    /// Time from the first attempt until the response was parsed, including
    /// any backoff between attempts.
    pub latency: Duration,

    /// Number of transport attempts made, `1` when no retry was needed.
    pub attempts: usize,
}

impl<T> Response<T> {
    /// Consumes the response and returns the parsed data.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Maps the parsed data while keeping the metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// # use renamed::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response {
    ///     data: 42,
    ///     raw_body: "42".to_string(),
    ///     status: StatusCode::OK,
    ///     headers: HeaderMap::new(),
    ///     latency: Duration::from_millis(12),
    ///     attempts: 1,
    /// };
    ///
    /// let doubled = response.map(|n| n * 2);
    /// assert_eq!(doubled.data, 84);
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
            attempts: self.attempts,
        }
    }

    /// Returns `true` if more than one attempt was needed.
    pub fn was_retried(&self) -> bool {
        self.attempts > 1
    }

    /// Returns a header value by name, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
