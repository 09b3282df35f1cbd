//! Per-request metadata: method, target, extra headers and query string.

use crate::{Error, Result};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

/// Describes a single API request, independent of its body.
///
/// The target may be a path relative to the client's base URL (`/user`) or an
/// absolute URL, such as the status URL returned by a long-running operation.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method.
    pub method: Method,

    /// A path relative to the base URL, or an absolute URL.
    pub target: String,

    /// Additional headers for this request.
    pub headers: HeaderMap,

    /// Query parameters, in insertion order.
    pub query_params: Vec<(String, String)>,
}

impl RequestMetadata {
    /// Creates a new `RequestMetadata` with the given method and target.
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            headers: HeaderMap::new(),
            query_params: Vec::new(),
        }
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Resolves the target against `base` and appends the query parameters.
    ///
    /// Relative targets are appended to the base path rather than replacing it,
    /// so `https://host/api/v1` + `/user` gives `https://host/api/v1/user`.
    ///
    /// # Examples
    ///
    /// ```
    /// use renamed::metadata::RequestMetadata;
    /// use http::Method;
    /// use url::Url;
    ///
    /// let base = Url::parse("https://www.renamed.to/api/v1").unwrap();
    ///
    /// let relative = RequestMetadata::new(Method::GET, "/user");
    /// assert_eq!(
    ///     relative.resolve(&base).unwrap().as_str(),
    ///     "https://www.renamed.to/api/v1/user"
    /// );
    ///
    /// let absolute = RequestMetadata::new(Method::GET, "https://jobs.renamed.to/status/abc");
    /// assert_eq!(
    ///     absolute.resolve(&base).unwrap().as_str(),
    ///     "https://jobs.renamed.to/status/abc"
    /// );
    /// ```
    pub fn resolve(&self, base: &Url) -> Result<Url> {
        let mut url = match Url::parse(&self.target) {
            Ok(absolute) => absolute,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let joined = format!(
                    "{}/{}",
                    base.as_str().trim_end_matches('/'),
                    self.target.trim_start_matches('/')
                );
                Url::parse(&joined)?
            }
            Err(e) => return Err(e.into()),
        };

        if !self.query_params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query_params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

impl Default for RequestMetadata {
    fn default() -> Self {
        Self::new(Method::GET, "")
    }
}
