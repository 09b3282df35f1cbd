//! Polling for long-running operations.
//!
//! Operations such as PDF splitting answer immediately with a status URL and
//! continue in the background. An [`AsyncJob`] polls that URL until the job
//! completes, fails, or runs out of its wait budget.

use crate::{
    metadata::RequestMetadata,
    models::{JobState, JobStatus},
    Client, Error, Result,
};
use http::Method;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;
use tokio::time::Instant;

/// Where an [`AsyncJob`] is in its lifecycle.
///
/// `Completed`, `Failed` and `TimedOut` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    /// Created, not yet awaited. No request has been made.
    Pending,
    /// `wait` is in progress.
    Polling,
    /// The job finished and its result was returned.
    Completed,
    /// The job reported failure, or polling it failed.
    Failed,
    /// The wait budget ran out before the job finished.
    TimedOut,
}

impl JobPhase {
    /// Returns `true` once no further transition can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobPhase::Completed | JobPhase::Failed | JobPhase::TimedOut
        )
    }
}

/// A handle on a long-running operation.
///
/// Each poll goes through the client's request executor, so individual polls
/// get the same retries and error classification as any other call. The wait
/// budget is wall-clock time across the whole wait, retries included.
///
/// `T` is the type the completed job's `result` payload is parsed into;
/// `serde_json::Value` returns the payload untouched.
///
/// # Examples
///
/// ```no_run
/// use renamed::{AsyncJob, Client};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), renamed::Error> {
/// let client = Client::new("rt_your_api_key")?;
/// let mut job: AsyncJob<serde_json::Value> = AsyncJob::new(
///     client,
///     "https://www.renamed.to/api/v1/status/job123",
///     Duration::from_secs(1),
///     Duration::from_secs(120),
/// );
///
/// let result = job
///     .wait_with_progress(|status| {
///         if let Some(progress) = status.progress {
///             println!("{}% done", progress);
///         }
///     })
///     .await?;
/// println!("{}", result);
/// # Ok(())
/// # }
/// ```
pub struct AsyncJob<T = serde_json::Value> {
    client: Client,
    status_url: String,
    poll_interval: Duration,
    timeout: Duration,
    phase: JobPhase,
    _result: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for AsyncJob<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncJob")
            .field("status_url", &self.status_url)
            .field("poll_interval", &self.poll_interval)
            .field("timeout", &self.timeout)
            .field("phase", &self.phase)
            .finish()
    }
}

impl<T> AsyncJob<T>
where
    T: DeserializeOwned,
{
    /// Creates a job for `status_url`. Nothing is sent until [`wait`](Self::wait).
    pub fn new(
        client: Client,
        status_url: impl Into<String>,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            status_url: status_url.into(),
            poll_interval,
            timeout,
            phase: JobPhase::Pending,
            _result: PhantomData,
        }
    }

    /// The URL polled for status.
    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    /// Time between polls.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Wall-clock budget for [`wait`](Self::wait).
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> JobPhase {
        self.phase
    }

    /// Waits for the job to finish and returns its result.
    ///
    /// # Errors
    ///
    /// See [`wait_with_progress`](Self::wait_with_progress).
    pub async fn wait(&mut self) -> Result<T> {
        self.wait_with_progress(|_| {}).await
    }

    /// Waits for the job to finish, calling `on_progress` for every
    /// in-progress status that carries a progress value.
    ///
    /// The callback runs synchronously between polls. It is never called for
    /// the terminal status, so the last value it sees is the last intermediate
    /// progress report.
    ///
    /// # Errors
    ///
    /// - Any error from polling the status URL, unchanged.
    /// - [`Error::Api`] when the job reports failure.
    /// - [`Error::Timeout`] when the wait budget runs out.
    /// - [`Error::Usage`] when called on a job that was already awaited.
    pub async fn wait_with_progress<F>(&mut self, mut on_progress: F) -> Result<T>
    where
        F: FnMut(&JobStatus),
    {
        if self.phase != JobPhase::Pending {
            return Err(Error::Usage(format!(
                "wait() can only be called once per job (current phase: {:?})",
                self.phase
            )));
        }
        self.phase = JobPhase::Polling;

        let started = Instant::now();
        let mut polls = 0usize;

        loop {
            let remaining = self.timeout.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                return Err(self.timed_out(polls));
            }

            polls += 1;
            let status = match tokio::time::timeout(remaining, self.fetch_status()).await {
                Ok(Ok(status)) => status,
                Ok(Err(e)) => {
                    self.phase = JobPhase::Failed;
                    return Err(e);
                }
                Err(_) => return Err(self.timed_out(polls)),
            };

            tracing::debug!(
                status_url = %self.status_url,
                job_id = %status.job_id,
                poll = polls,
                state = ?status.status,
                progress = ?status.progress,
                "Polled job status"
            );

            match status.status {
                JobState::Completed => return self.complete(status),
                JobState::Failed => {
                    self.phase = JobPhase::Failed;
                    return Err(job_failure(status));
                }
                JobState::Pending | JobState::Processing | JobState::Unknown => {
                    if status.progress.is_some() {
                        on_progress(&status);
                    }
                }
            }

            let remaining = self.timeout.saturating_sub(started.elapsed());
            tokio::time::sleep(self.poll_interval.min(remaining)).await;
        }
    }

    async fn fetch_status(&self) -> Result<JobStatus> {
        let metadata = RequestMetadata::new(Method::GET, self.status_url.clone());
        Ok(self.client.call::<JobStatus>(metadata, None).await?.data)
    }

    fn complete(&mut self, status: JobStatus) -> Result<T> {
        let payload = status.result.unwrap_or(serde_json::Value::Null);

        match serde_json::from_value::<T>(payload.clone()) {
            Ok(result) => {
                self.phase = JobPhase::Completed;
                tracing::info!(
                    status_url = %self.status_url,
                    job_id = %status.job_id,
                    "Job completed"
                );
                Ok(result)
            }
            Err(e) => {
                self.phase = JobPhase::Failed;
                Err(Error::Api {
                    status: None,
                    code: None,
                    message: format!("Failed to parse job result: {}", e),
                    raw_response: Some(payload.to_string()),
                })
            }
        }
    }

    fn timed_out(&mut self, polls: usize) -> Error {
        self.phase = JobPhase::TimedOut;
        tracing::warn!(
            status_url = %self.status_url,
            polls = polls,
            timeout_ms = self.timeout.as_millis() as u64,
            "Job did not finish within its wait budget"
        );
        Error::Timeout {
            message: format!("job did not finish within {:?}", self.timeout),
        }
    }
}

/// Builds the error for a job that reported failure.
fn job_failure(status: JobStatus) -> Error {
    let (code, message) = match &status.error {
        Some(error) => (
            error.code().map(str::to_owned),
            error.message().unwrap_or("Job failed").to_string(),
        ),
        None => (None, "Job failed".to_string()),
    };

    tracing::warn!(job_id = %status.job_id, code = ?code, message = %message, "Job failed");

    Error::Api {
        status: None,
        code,
        message,
        raw_response: None,
    }
}
