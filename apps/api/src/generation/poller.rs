//! The generation job poller.
//!
//! One contract over two provider protocol shapes: a submit call that may
//! come back already terminal (blocking providers), or an opaque job id
//! that is polled at a fixed interval until it reaches a terminal state.
//! Each `generate` call owns its own poll loop; concurrent calls are not
//! coordinated and there is no cancellation. Dropping the future mid-poll
//! orphans the remote job, which matches the documented behavior of the
//! storefront this replaces.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::output;
use crate::generation::profile::ProviderProfile;

/// Remote job lifecycle. Only the provider advances these; the client never
/// writes a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl JobState {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Succeeded | JobState::Failed | JobState::Canceled)
    }
}

/// Snapshot of a remote generation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatus {
    pub id: String,
    pub status: JobState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Seam between the poll loop and the provider HTTP client, so tests can
/// script a job's lifecycle without a network.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Starts a job. With a blocking profile the returned snapshot may
    /// already be terminal.
    async fn submit(&self, profile: &ProviderProfile, input: Value) -> Result<JobStatus, AppError>;

    /// Fetches the current snapshot of a previously submitted job.
    async fn status(&self, id: &str) -> Result<JobStatus, AppError>;
}

/// Runs one generation job to completion and extracts the image URL.
pub async fn generate(
    backend: &dyn GenerationBackend,
    profile: &ProviderProfile,
    prompt: &str,
    mask: Option<&str>,
) -> Result<String, AppError> {
    if prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt is required".to_string()));
    }

    let input = profile.input(prompt, mask);
    let mut job = backend.submit(profile, input).await?;
    let mut attempts = 0u32;

    while !job.status.is_terminal() {
        if attempts >= profile.max_poll_attempts {
            return Err(AppError::Timeout { attempts });
        }
        tokio::time::sleep(profile.poll_interval).await;
        attempts += 1;
        job = backend.status(&job.id).await?;
        debug!(id = %job.id, status = ?job.status, attempts, "polled generation job");
    }

    conclude(job)
}

/// Maps a terminal job snapshot to its image URL or the matching failure.
fn conclude(job: JobStatus) -> Result<String, AppError> {
    match job.status {
        JobState::Succeeded => output::normalize(&job.output.unwrap_or(Value::Null)),
        JobState::Failed => Err(AppError::Remote(
            job.error
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| "the model could not finish the sketch".to_string()),
        )),
        JobState::Canceled => Err(AppError::Remote("generation was canceled".to_string())),
        JobState::Starting | JobState::Processing => Err(AppError::Remote(
            "job left the poll loop in a non-terminal state".to_string(),
        )),
    }
}
