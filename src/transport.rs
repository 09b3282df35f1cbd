//! The HTTP transport boundary.
//!
//! The client never talks to an HTTP library directly. It hands a fully built
//! [`TransportRequest`] to a [`Transport`] and gets back either a
//! [`TransportResponse`] (any status) or a [`TransportError`] when no response
//! was received. [`ReqwestTransport`] is the production implementation; tests
//! substitute their own.

use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use url::Url;

/// Sends HTTP requests on behalf of a [`Client`](crate::Client).
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use renamed::transport::{Transport, TransportError, TransportRequest, TransportResponse};
/// use http::{HeaderMap, StatusCode};
///
/// struct AlwaysOk;
///
/// #[async_trait]
/// impl Transport for AlwaysOk {
///     async fn send(
///         &self,
///         _request: TransportRequest,
///     ) -> Result<TransportResponse, TransportError> {
///         Ok(TransportResponse::new(StatusCode::OK, HeaderMap::new(), "{}"))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the response, whatever its status.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// A request ready to be put on the wire.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: Method,
    /// The absolute request URL.
    pub url: Url,
    /// Headers, including `Authorization`.
    pub headers: HeaderMap,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

/// A request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// A JSON document. The client sets the content type.
    Json(serde_json::Value),
    /// A `multipart/form-data` upload. The transport sets the content type
    /// including the boundary.
    Multipart(MultipartForm),
}

/// A transport-agnostic multipart form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    /// Plain text fields, in order.
    pub fields: Vec<(String, String)>,
    /// File parts, in order.
    pub files: Vec<FilePart>,
}

impl MultipartForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Adds a file part.
    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    /// Returns the value of the first text field with the given name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A file inside a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    /// The form field name.
    pub field_name: String,
    /// The file name reported to the server.
    pub file_name: String,
    /// The MIME type of the content.
    pub content_type: String,
    /// The file contents.
    pub bytes: Vec<u8>,
}

/// A response received from the server, regardless of status.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Creates a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the canonical reason phrase for the status, e.g. `"Not Found"`.
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("Unknown Status")
    }
}

/// A failure that prevented any HTTP response from being received.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The transport gave up waiting for the server.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be made or was lost.
    #[error("{0}")]
    Connection(String),

    /// The request could not be built (bad header, unreadable body, etc.).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_builder() {
            TransportError::InvalidRequest(error.to_string())
        } else {
            TransportError::Connection(error.to_string())
        }
    }
}

/// The default [`Transport`], backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> crate::Result<Self> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            crate::Error::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest::Client`, e.g. one configured with a proxy.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        match request.body {
            Some(RequestBody::Json(value)) => {
                builder = builder.json(&value);
            }
            Some(RequestBody::Multipart(form)) => {
                builder = builder.multipart(to_reqwest_form(form)?);
            }
            None => {}
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_reqwest_form(form: MultipartForm) -> Result<reqwest::multipart::Form, TransportError> {
    let mut out = reqwest::multipart::Form::new();

    for (name, value) in form.fields {
        out = out.text(name, value);
    }

    for file in form.files {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        out = out.part(file.field_name, part);
    }

    Ok(out)
}
