//! # renamed - Rust client for the renamed.to API
//!
//! An async client for the [renamed.to](https://www.renamed.to) document-processing
//! service: AI-suggested file names, PDF splitting and account information. It
//! takes care of authentication, retries with backoff, error classification and
//! polling of long-running jobs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use renamed::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), renamed::Error> {
//!     let client = Client::new("rt_your_api_key")?;
//!
//!     let user = client.get_user().await?;
//!     println!("{} has {:?} credits left", user.email, user.credits);
//!
//!     let result = client.rename_file("scan-0042.pdf", None).await?;
//!     println!("Suggested: {}", result.suggested_filename);
//!
//!     let mut job = client.pdf_split_file("batch.pdf", None).await?;
//!     let split = job
//!         .wait_with_progress(|status| println!("progress: {:?}", status.progress))
//!         .await?;
//!     println!("Split into {} documents", split.documents.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is one [`Error`] variant, so callers can pick a remedy:
//!
//! ```no_run
//! use renamed::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new("rt_your_api_key")?;
//! match client.rename_file("scan.pdf", None).await {
//!     Ok(result) => println!("{}", result.suggested_filename),
//!     Err(Error::Authentication { .. }) => eprintln!("re-authenticate"),
//!     Err(Error::InsufficientCredits { .. }) => eprintln!("top up credits"),
//!     Err(Error::RateLimit { retry_after, .. }) => eprintln!("back off for {:?}", retry_after),
//!     Err(Error::Validation { message, .. }) => eprintln!("bad input: {}", message),
//!     Err(e) => eprintln!("failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! The HTTP layer is a [`Transport`](transport::Transport) trait object set with
//! [`ClientBuilder::transport`], so tests can script responses without a server.

mod client;
mod error;
pub mod job;
pub mod metadata;
pub mod models;
pub mod rate_limit;
mod response;
pub mod retry;
pub mod transport;

pub use client::{
    Client, ClientBuilder, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_JOB_TIMEOUT,
    DEFAULT_MAX_RATE_LIMIT_WAIT, DEFAULT_MAX_RETRIES, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT,
};
pub use error::{Error, Result};
pub use job::{AsyncJob, JobPhase};
pub use models::{
    JobError, JobHandle, JobState, JobStatus, PdfSplitOptions, PdfSplitResult, RenameOptions,
    RenameResult, SplitDocument, SplitMode, Team, User,
};
pub use response::Response;
pub use retry::Backoff;
