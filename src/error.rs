//! Error types for renamed.to API calls.
//!
//! Every failed request ends in exactly one [`Error`] variant. The service-facing
//! variants (`Authentication` through `Api`) are produced by the request executor
//! and are never re-wrapped by the layers above it, so callers can match on them
//! to decide how to recover.

use http::StatusCode;
use std::time::Duration;

/// The main error type for renamed.to API calls.
///
/// # Examples
///
/// ```no_run
/// use renamed::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new("rt_your_api_key")?;
///
/// match client.get_user().await {
///     Ok(user) => println!("{} has {:?} credits", user.email, user.credits),
///     Err(Error::Authentication { .. }) => eprintln!("check your API key"),
///     Err(Error::InsufficientCredits { .. }) => eprintln!("top up your account"),
///     Err(Error::RateLimit { retry_after, .. }) => {
///         eprintln!("slow down, retry after {:?}", retry_after)
///     }
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API key is missing, malformed or rejected by the service (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Message describing the failure
        message: String,
    },

    /// The request was malformed or the uploaded file was rejected (HTTP 400).
    #[error("Validation failed: {message}")]
    Validation {
        /// Message from the response body `error` field, when present
        message: String,
        /// Structured details returned by the service, if any
        details: Option<serde_json::Value>,
    },

    /// Too many requests were made (HTTP 429).
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        /// Message describing the failure
        message: String,
        /// How long the service asked us to wait, if it said
        retry_after: Option<Duration>,
    },

    /// The account does not have enough credits for the operation (HTTP 402).
    #[error("Insufficient credits: {message}")]
    InsufficientCredits {
        /// Message describing the failure
        message: String,
    },

    /// The request never produced an HTTP response (connection refused, DNS
    /// failure, connection reset, etc.).
    #[error("Network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// A single request exceeded its deadline, or a job did not finish within
    /// its wait budget.
    #[error("Timed out: {message}")]
    Timeout {
        /// Description of what timed out
        message: String,
    },

    /// An unclassified failure: an unexpected HTTP status, an unparsable
    /// response body, or a job that reported failure.
    #[error("API error: {message}")]
    Api {
        /// The HTTP status code, when the failure came from a response
        status: Option<StatusCode>,
        /// Machine-readable error code, when the service provided one
        code: Option<String>,
        /// Human-readable message
        message: String,
        /// The raw response body, when available
        raw_response: Option<String>,
    },

    /// The client or a request was built from invalid values, e.g. a bad
    /// header or a body that cannot be serialized to JSON.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Reading a local file for upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The API was used incorrectly, e.g. waiting on a job twice.
    #[error("Usage error: {0}")]
    Usage(String),
}

impl Error {
    /// Returns `true` if the request executor retries this error.
    ///
    /// Network failures, rate limits and 5xx responses are transient. Timeouts
    /// are surfaced immediately since retrying would exceed the caller's deadline.
    ///
    /// # Examples
    ///
    /// ```
    /// use renamed::Error;
    /// use http::StatusCode;
    ///
    /// let err = Error::Api {
    ///     status: Some(StatusCode::BAD_GATEWAY),
    ///     code: None,
    ///     message: "Bad Gateway".to_string(),
    ///     raw_response: None,
    /// };
    /// assert!(err.is_retryable());
    ///
    /// let err = Error::Authentication { message: "Invalid API key".to_string() };
    /// assert!(!err.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network { .. } => true,
            Error::RateLimit { .. } => true,
            Error::Api { status, .. } => status.is_some_and(|s| s.is_server_error()),
            Error::Authentication { .. }
            | Error::Validation { .. }
            | Error::InsufficientCredits { .. }
            | Error::Timeout { .. }
            | Error::Configuration(_)
            | Error::InvalidUrl(_)
            | Error::Io(_)
            | Error::Usage(_) => false,
        }
    }

    /// Returns the HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Authentication { .. } => Some(StatusCode::UNAUTHORIZED),
            Error::Validation { .. } => Some(StatusCode::BAD_REQUEST),
            Error::InsufficientCredits { .. } => Some(StatusCode::PAYMENT_REQUIRED),
            Error::RateLimit { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            Error::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns the server-provided retry delay for rate limit errors.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Returns the machine-readable error code for generic API errors.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns the raw response body if this error carries one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Api { raw_response, .. } => raw_response.as_deref(),
            _ => None,
        }
    }
}

/// A specialized `Result` type for renamed.to API calls.
pub type Result<T> = std::result::Result<T, Error>;
