//! Replicate predictions client: the single point of entry for all image
//! generation calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the Replicate API
//! directly. Everything goes through `GenerationBackend`, so the poll loop
//! and the handlers never learn provider specifics.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::AppError;
use crate::generation::poller::{GenerationBackend, JobStatus};
use crate::generation::profile::ProviderProfile;

const REPLICATE_API_URL: &str = "https://api.replicate.com/v1";

/// Non-2xx bodies carry the message in a `detail` field.
#[derive(Debug, Deserialize)]
struct ReplicateError {
    detail: String,
}

#[derive(Clone)]
pub struct ReplicateClient {
    client: Client,
    token: String,
}

impl ReplicateClient {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            token,
        }
    }

    async fn decode(response: reqwest::Response) -> Result<JobStatus, AppError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Remote(format!("could not read provider response: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ReplicateError>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            return Err(AppError::Remote(format!(
                "provider returned {status}: {message}"
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| AppError::Remote(format!("could not decode provider response: {e}")))
    }
}

#[async_trait]
impl GenerationBackend for ReplicateClient {
    async fn submit(&self, profile: &ProviderProfile, input: Value) -> Result<JobStatus, AppError> {
        let url = format!("{REPLICATE_API_URL}/models/{}/predictions", profile.model);
        debug!(model = profile.model, blocking = profile.block_until_done, "submitting prediction");

        let mut request = self
            .client
            .post(&url)
            .header("Authorization", format!("Token {}", self.token))
            .json(&json!({ "input": input }));

        // Ask the provider to hold the call open until the job is terminal.
        // It may still give up and hand back an in-flight job; the poll
        // loop covers that.
        if profile.block_until_done {
            request = request.header("Prefer", "wait");
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("could not reach provider: {e}")))?;

        Self::decode(response).await
    }

    async fn status(&self, id: &str) -> Result<JobStatus, AppError> {
        let url = format!("{REPLICATE_API_URL}/predictions/{id}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Token {}", self.token))
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("could not reach provider: {e}")))?;

        Self::decode(response).await
    }
}
