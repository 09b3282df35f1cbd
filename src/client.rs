//! The renamed.to API client and its request executor.
//!
//! [`Client`] owns the whole request pipeline: it attaches credentials, hands the
//! request to the configured [`Transport`], classifies the outcome into an
//! [`Error`] variant and retries transient failures. Use [`ClientBuilder`] to
//! configure one.

use crate::{
    job::AsyncJob,
    metadata::RequestMetadata,
    models::{JobHandle, PdfSplitOptions, PdfSplitResult, RenameOptions, RenameResult, User},
    rate_limit::RateLimitInfo,
    retry::Backoff,
    transport::{
        FilePart, MultipartForm, RequestBody, ReqwestTransport, Transport, TransportError,
        TransportRequest, TransportResponse,
    },
    Error, Response, Result,
};
use http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use url::Url;

/// The production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.renamed.to/api/v1";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of transport attempts per call, including the first one.
pub const DEFAULT_MAX_RETRIES: usize = 2;

/// Default upper bound on a server-provided rate limit delay.
pub const DEFAULT_MAX_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Default interval between job status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default wall-clock budget for waiting on a job.
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(300);

/// Environment variable read by [`Client::from_env`] for the API key.
pub const API_KEY_ENV: &str = "RENAMED_API_KEY";

/// Environment variable read by [`Client::from_env`] for the base URL.
pub const BASE_URL_ENV: &str = "RENAMED_BASE_URL";

const USER_AGENT: &str = concat!("renamed-rust/", env!("CARGO_PKG_VERSION"));

/// A client for the renamed.to API.
///
/// Cloning is cheap and clones share configuration and the underlying
/// transport. The client holds no per-call state, so one instance can serve
/// many concurrent requests and jobs.
///
/// # Examples
///
/// ```no_run
/// use renamed::Client;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), renamed::Error> {
/// let client = Client::builder()
///     .api_key("rt_your_api_key")
///     .timeout(Duration::from_secs(60))
///     .max_retries(4)
///     .build()?;
///
/// let user = client.get_user().await?;
/// println!("Signed in as {}", user.email);
///
/// let pdf = std::fs::read("invoice.pdf")?;
/// let suggestion = client.rename(pdf, "invoice.pdf", None).await?;
/// println!("Suggested name: {}", suggestion.suggested_filename);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    authorization: HeaderValue,
    base_url: Url,
    default_headers: HeaderMap,
    timeout: Duration,
    max_retries: usize,
    backoff: Backoff,
    max_rate_limit_wait: Duration,
    poll_interval: Duration,
    job_timeout: Duration,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("api_key", &"[redacted]")
            .field("timeout", &self.inner.timeout)
            .field("max_retries", &self.inner.max_retries)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Creates a client from `RENAMED_API_KEY` and, if set, `RENAMED_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the API key variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder().api_key(std::env::var(API_KEY_ENV).unwrap_or_default());
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(base_url)?;
        }
        builder.build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base URL relative targets are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Makes an API request and parses the JSON response.
    ///
    /// This is the request executor every endpoint goes through. Network
    /// failures, rate limits and 5xx responses are retried until
    /// `max_retries` attempts have been made; any other failure is returned
    /// immediately. When attempts run out the last error is returned as is.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use renamed::{Client, metadata::RequestMetadata};
    /// use http::Method;
    ///
    /// # async fn example() -> Result<(), renamed::Error> {
    /// let client = Client::new("rt_your_api_key")?;
    ///
    /// let metadata = RequestMetadata::new(Method::GET, "/user");
    /// let response = client.call::<serde_json::Value>(metadata, None).await?;
    /// println!("{} after {} attempt(s)", response.data, response.attempts);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call<T>(
        &self,
        metadata: RequestMetadata,
        body: Option<RequestBody>,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(&metadata, body)?;
        let max_attempts = self.inner.max_retries.max(1);
        let start_time = Instant::now();
        let mut attempt = 0;

        loop {
            attempt += 1;

            let result = match self.send_once(request.clone(), attempt).await {
                Ok(response) => parse_response(response, start_time.elapsed(), attempt),
                Err(e) => Err(e),
            };

            let error = match result {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };

            tracing::warn!(
                error = %error,
                attempt = attempt,
                max_attempts = max_attempts,
                method = %request.method,
                url = %request.url,
                "Request failed"
            );

            if !error.is_retryable() || attempt >= max_attempts {
                return Err(error);
            }

            let delay = self.retry_delay(&error, attempt);
            tracing::info!(
                delay_ms = delay.as_millis() as u64,
                attempt = attempt,
                "Retrying request after delay"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Builds the wire request once; each attempt sends a clone of it.
    fn build_request(
        &self,
        metadata: &RequestMetadata,
        body: Option<RequestBody>,
    ) -> Result<TransportRequest> {
        let url = metadata.resolve(&self.inner.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, self.inner.authorization.clone());
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        if matches!(body, Some(RequestBody::Json(_))) {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
        for (name, value) in &self.inner.default_headers {
            headers.insert(name, value.clone());
        }
        for (name, value) in &metadata.headers {
            headers.insert(name, value.clone());
        }

        Ok(TransportRequest {
            method: metadata.method.clone(),
            url,
            headers,
            body,
        })
    }

    /// Sends one attempt, mapping transport failures onto the error taxonomy.
    async fn send_once(
        &self,
        request: TransportRequest,
        attempt: usize,
    ) -> Result<TransportResponse> {
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            attempt = attempt,
            "Executing HTTP request"
        );

        let timeout = self.inner.timeout;
        match tokio::time::timeout(timeout, self.inner.transport.send(request)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(TransportError::Timeout)) | Err(_) => Err(Error::Timeout {
                message: format!("request did not complete within {:?}", timeout),
            }),
            Ok(Err(TransportError::Connection(message))) => Err(Error::Network { message }),
            Ok(Err(TransportError::InvalidRequest(message))) => {
                Err(Error::Configuration(message))
            }
        }
    }

    fn retry_delay(&self, error: &Error, attempt: usize) -> Duration {
        let hint = RateLimitInfo {
            retry_after: error.retry_after(),
        };
        match hint.delay(self.inner.max_rate_limit_wait) {
            Some(delay) => {
                tracing::info!(
                    rate_limit_delay_ms = delay.as_millis() as u64,
                    attempt = attempt,
                    "Rate limited - waiting before retry"
                );
                delay
            }
            None => self.inner.backoff.delay_for_attempt(attempt),
        }
    }

    /// Makes a GET request to the given path or absolute URL.
    pub async fn get<T>(&self, target: impl Into<String>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.call(RequestMetadata::new(Method::GET, target), None)
            .await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post<Req, T>(&self, target: impl Into<String>, body: &Req) -> Result<Response<T>>
    where
        Req: Serialize,
        T: DeserializeOwned,
    {
        self.call(RequestMetadata::new(Method::POST, target), Some(json_body(body)?))
            .await
    }

    /// Makes a PUT request with a JSON body.
    pub async fn put<Req, T>(&self, target: impl Into<String>, body: &Req) -> Result<Response<T>>
    where
        Req: Serialize,
        T: DeserializeOwned,
    {
        self.call(RequestMetadata::new(Method::PUT, target), Some(json_body(body)?))
            .await
    }

    /// Makes a PATCH request with a JSON body.
    pub async fn patch<Req, T>(&self, target: impl Into<String>, body: &Req) -> Result<Response<T>>
    where
        Req: Serialize,
        T: DeserializeOwned,
    {
        self.call(RequestMetadata::new(Method::PATCH, target), Some(json_body(body)?))
            .await
    }

    /// Makes a DELETE request.
    pub async fn delete<T>(&self, target: impl Into<String>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.call(RequestMetadata::new(Method::DELETE, target), None)
            .await
    }

    /// Fetches the authenticated account.
    pub async fn get_user(&self) -> Result<User> {
        Ok(self.get::<User>("/user").await?.data)
    }

    /// Asks the service for a descriptive file name for a document.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use renamed::{Client, RenameOptions};
    ///
    /// # async fn example() -> Result<(), renamed::Error> {
    /// let client = Client::new("rt_your_api_key")?;
    /// let bytes = std::fs::read("scan.pdf")?;
    ///
    /// let options = RenameOptions {
    ///     template: Some("{date}_{type}_{company}".to_string()),
    /// };
    /// let result = client.rename(bytes, "scan.pdf", Some(options)).await?;
    /// println!("{} -> {}", result.original_filename, result.suggested_filename);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn rename(
        &self,
        bytes: impl Into<Vec<u8>>,
        file_name: impl Into<String>,
        options: Option<RenameOptions>,
    ) -> Result<RenameResult> {
        let mut form = MultipartForm::new().file(upload_part(bytes.into(), file_name.into()));
        if let Some(template) = options.and_then(|o| o.template) {
            form = form.text("template", template);
        }

        let metadata = RequestMetadata::new(Method::POST, "/rename");
        Ok(self
            .call::<RenameResult>(metadata, Some(RequestBody::Multipart(form)))
            .await?
            .data)
    }

    /// Reads a local file and calls [`Client::rename`] with it.
    pub async fn rename_file(
        &self,
        path: impl AsRef<Path>,
        options: Option<RenameOptions>,
    ) -> Result<RenameResult> {
        let (bytes, file_name) = read_upload(path.as_ref()).await?;
        self.rename(bytes, file_name, options).await
    }

    /// Starts splitting a multi-document PDF.
    ///
    /// Splitting runs in the background on the service; the returned job is
    /// driven with [`AsyncJob::wait`] or [`AsyncJob::wait_with_progress`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use renamed::{Client, PdfSplitOptions, SplitMode};
    ///
    /// # async fn example() -> Result<(), renamed::Error> {
    /// let client = Client::new("rt_your_api_key")?;
    /// let bytes = std::fs::read("batch.pdf")?;
    ///
    /// let options = PdfSplitOptions {
    ///     mode: Some(SplitMode::Auto),
    ///     ..Default::default()
    /// };
    /// let mut job = client.pdf_split(bytes, "batch.pdf", Some(options)).await?;
    /// let result = job
    ///     .wait_with_progress(|status| println!("{:?}%", status.progress))
    ///     .await?;
    /// for doc in result.documents {
    ///     println!("{} (pages {})", doc.filename, doc.pages);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn pdf_split(
        &self,
        bytes: impl Into<Vec<u8>>,
        file_name: impl Into<String>,
        options: Option<PdfSplitOptions>,
    ) -> Result<AsyncJob<PdfSplitResult>> {
        let mut form = MultipartForm::new().file(upload_part(bytes.into(), file_name.into()));
        if let Some(options) = options {
            if let Some(mode) = options.mode {
                form = form.text("mode", mode.as_str());
            }
            if let Some(pages) = options.pages_per_split {
                form = form.text("pagesPerSplit", pages.to_string());
            }
        }

        let metadata = RequestMetadata::new(Method::POST, "/pdf-split");
        let handle = self
            .call::<JobHandle>(metadata, Some(RequestBody::Multipart(form)))
            .await?
            .data;

        tracing::info!(
            status_url = %handle.status_url,
            job_id = ?handle.job_id,
            "Started PDF split job"
        );

        Ok(self.job(handle.status_url))
    }

    /// Reads a local file and calls [`Client::pdf_split`] with it.
    pub async fn pdf_split_file(
        &self,
        path: impl AsRef<Path>,
        options: Option<PdfSplitOptions>,
    ) -> Result<AsyncJob<PdfSplitResult>> {
        let (bytes, file_name) = read_upload(path.as_ref()).await?;
        self.pdf_split(bytes, file_name, options).await
    }

    /// Creates a job for an existing status URL using the client's default
    /// poll interval and wait budget. No request is made until it is awaited.
    pub fn job<T>(&self, status_url: impl Into<String>) -> AsyncJob<T>
    where
        T: DeserializeOwned,
    {
        AsyncJob::new(
            self.clone(),
            status_url,
            self.inner.poll_interval,
            self.inner.job_timeout,
        )
    }
}

fn json_body<Req: Serialize>(body: &Req) -> Result<RequestBody> {
    serde_json::to_value(body)
        .map(RequestBody::Json)
        .map_err(|e| Error::Configuration(format!("Failed to serialize request body: {}", e)))
}

fn upload_part(bytes: Vec<u8>, file_name: String) -> FilePart {
    FilePart {
        field_name: "file".to_string(),
        content_type: content_type_for(&file_name).to_string(),
        file_name,
        bytes,
    }
}

async fn read_upload(path: &Path) -> Result<(Vec<u8>, String)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            Error::Configuration(format!("Path has no usable file name: {}", path.display()))
        })?
        .to_string();
    let bytes = tokio::fs::read(path).await?;
    Ok((bytes, file_name))
}

/// Guesses the upload content type from the file extension.
pub(crate) fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Turns a transport response into parsed data or a classified error.
fn parse_response<T>(
    response: TransportResponse,
    latency: Duration,
    attempts: usize,
) -> Result<Response<T>>
where
    T: DeserializeOwned,
{
    let status = response.status;

    tracing::debug!(
        status = status.as_u16(),
        latency_ms = latency.as_millis() as u64,
        attempts = attempts,
        "Received HTTP response"
    );

    if !response.is_success() {
        return Err(classify_error_response(response));
    }

    // An empty 2xx body parses as JSON null, which suits `()` and `Option<_>`.
    let text = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };

    match serde_json::from_str::<T>(text) {
        Ok(data) => Ok(Response {
            data,
            raw_body: response.body,
            status,
            headers: response.headers,
            latency,
            attempts,
        }),
        Err(e) => {
            tracing::error!(
                error = %e,
                raw_response = %response.body,
                "Failed to deserialize response"
            );

            Err(Error::Api {
                status: Some(status),
                code: None,
                message: format!("Failed to parse response body: {}", e),
                raw_response: Some(response.body),
            })
        }
    }
}

/// Maps a non-2xx response onto the error taxonomy.
fn classify_error_response(response: TransportResponse) -> Error {
    let TransportResponse {
        status,
        headers,
        body,
    } = response;
    let json: Option<serde_json::Value> = serde_json::from_str(&body).ok();
    let message = error_message(json.as_ref(), status);

    if status.is_client_error() {
        tracing::error!(status = status.as_u16(), response = %body, "Client error (4xx)");
    } else if status.is_server_error() {
        tracing::warn!(status = status.as_u16(), response = %body, "Server error (5xx)");
    } else {
        tracing::warn!(
            status = status.as_u16(),
            response = %body,
            "Unexpected response status"
        );
    }

    match status {
        StatusCode::BAD_REQUEST => Error::Validation {
            message,
            details: json.as_ref().and_then(|v| v.get("details")).cloned(),
        },
        StatusCode::UNAUTHORIZED => Error::Authentication { message },
        StatusCode::PAYMENT_REQUIRED => Error::InsufficientCredits { message },
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimit {
            message,
            retry_after: RateLimitInfo::from_response(json.as_ref(), &headers).retry_after,
        },
        _ => Error::Api {
            status: Some(status),
            code: json
                .as_ref()
                .and_then(|v| v.get("code"))
                .and_then(|c| c.as_str())
                .map(str::to_owned),
            message,
            raw_response: Some(body),
        },
    }
}

/// Picks the most specific message the body offers, falling back to the
/// status reason phrase.
fn error_message(json: Option<&serde_json::Value>, status: StatusCode) -> String {
    let from_body = json.and_then(|v| {
        let error = v.get("error");
        error
            .and_then(|e| e.as_str())
            .or_else(|| error.and_then(|e| e.get("message")).and_then(|m| m.as_str()))
            .or_else(|| v.get("message").and_then(|m| m.as_str()))
    });

    match from_body {
        Some(message) => message.to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use renamed::{Backoff, ClientBuilder};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), renamed::Error> {
/// let client = ClientBuilder::new()
///     .api_key("rt_your_api_key")
///     .base_url("https://staging.renamed.to/api/v1")?
///     .max_retries(5)
///     .backoff(Backoff {
///         initial_delay: Duration::from_millis(250),
///         max_delay: Duration::from_secs(8),
///         jitter: true,
///     })
///     .default_header("X-Request-Source", "batch-importer")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    default_headers: HeaderMap,
    timeout: Duration,
    max_retries: usize,
    backoff: Backoff,
    max_rate_limit_wait: Duration,
    poll_interval: Duration,
    job_timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            default_headers: HeaderMap::new(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: Backoff::default(),
            max_rate_limit_wait: DEFAULT_MAX_RATE_LIMIT_WAIT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            job_timeout: DEFAULT_JOB_TIMEOUT,
            transport: None,
        }
    }

    /// Sets the API key sent as a bearer token.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Adds a header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the per-request deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the total number of attempts per call. `0` behaves like `1`.
    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the backoff used between retries without a server hint.
    pub fn backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Caps how long a server `retryAfter` hint may make us wait.
    pub fn max_rate_limit_wait(mut self, max_wait: Duration) -> Self {
        self.max_rate_limit_wait = max_wait;
        self
    }

    /// Sets the poll interval for jobs created by this client.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the wait budget for jobs created by this client.
    pub fn job_timeout(mut self, timeout: Duration) -> Self {
        self.job_timeout = timeout;
        self
    }

    /// Replaces the HTTP transport, e.g. with a test double.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the configured `Client`. No network activity happens here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the API key is missing or blank, and
    /// [`Error::Configuration`] for a zero timeout or a failed HTTP client setup.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Authentication {
                message: "API key is required".to_string(),
            })?;

        let mut authorization = HeaderValue::try_from(format!("Bearer {}", api_key.trim()))
            .map_err(|_| Error::Authentication {
                message: "API key contains invalid characters".to_string(),
            })?;
        authorization.set_sensitive(true);

        if self.timeout.is_zero() {
            return Err(Error::Configuration(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                transport,
                authorization,
                base_url,
                default_headers: self.default_headers,
                timeout: self.timeout,
                max_retries: self.max_retries,
                backoff: self.backoff,
                max_rate_limit_wait: self.max_rate_limit_wait,
                poll_interval: self.poll_interval,
                job_timeout: self.job_timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
