//! Request options and response payloads for the renamed.to endpoints.

use serde::{Deserialize, Serialize};

/// The authenticated account, returned by `GET /user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Empty when the service omits it.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub credits: Option<i64>,
    #[serde(default)]
    pub team: Option<Team>,
}

/// The team an account belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// Options for [`Client::rename`](crate::Client::rename).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenameOptions {
    /// A naming template, e.g. `"{date}_{type}_{company}"`.
    pub template: Option<String>,
}

/// A suggested file name for an uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameResult {
    pub original_filename: String,
    pub suggested_filename: String,
    #[serde(default)]
    pub folder_path: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// How a PDF should be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Let the service detect document boundaries.
    Auto,
    /// Split every `pages_per_split` pages.
    Pages,
    /// Split on blank separator pages.
    Blank,
}

impl SplitMode {
    /// The wire value of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMode::Auto => "auto",
            SplitMode::Pages => "pages",
            SplitMode::Blank => "blank",
        }
    }
}

/// Options for [`Client::pdf_split`](crate::Client::pdf_split).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfSplitOptions {
    pub mode: Option<SplitMode>,
    /// Only meaningful with [`SplitMode::Pages`].
    pub pages_per_split: Option<u32>,
}

/// The response that starts a long-running operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobHandle {
    /// Where to poll for progress.
    pub status_url: String,
    #[serde(default)]
    pub job_id: Option<String>,
}

/// The final result of a PDF split job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfSplitResult {
    pub original_filename: String,
    pub documents: Vec<SplitDocument>,
    pub total_pages: u32,
}

/// One document produced by a PDF split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitDocument {
    pub index: u32,
    pub filename: String,
    /// Page range in the original, e.g. `"1-5"`.
    pub pages: String,
    pub download_url: String,
    /// Size in bytes.
    pub size: u64,
}

/// The state reported by a job status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Pending,
    Processing,
    Completed,
    Failed,
    /// A state this client does not know about yet. Treated as non-terminal.
    #[serde(other)]
    Unknown,
}

impl JobState {
    /// Returns `true` for `Completed` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }
}

/// One poll of a job status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub job_id: String,
    pub status: JobState,
    /// Percentage complete, 0 to 100.
    #[serde(default)]
    pub progress: Option<u8>,
    /// Present once the job has completed.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Present once the job has failed.
    #[serde(default)]
    pub error: Option<JobError>,
}

/// Error information attached to a failed job.
///
/// The service sends either a bare message or an object with a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobError {
    Message(String),
    Detailed {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl JobError {
    pub fn message(&self) -> Option<&str> {
        match self {
            JobError::Message(message) => Some(message),
            JobError::Detailed { message, .. } => message.as_deref(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            JobError::Message(_) => None,
            JobError::Detailed { code, .. } => code.as_deref(),
        }
    }
}
