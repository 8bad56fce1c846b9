//! Axum route handlers for the sketch generation API.

use anyhow::Context;
use axum::{
    extract::{Query, State},
    Json,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::poller::{self, GenerationBackend, JobState, JobStatus};
use crate::generation::prompts::compose_sketch_prompt;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SketchRequest {
    pub prompt: String,
    /// Base64 data URI delimiting where the model may draw. When absent the
    /// server falls back to its bundled blade mask.
    #[serde(rename = "maskImage", default)]
    pub mask_image: Option<String>,
}

/// Either an opaque job id for client polling (async profile) or the final
/// image URL (blocking profile).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SketchResponse {
    Queued { id: String },
    Finished { image: String },
}

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub id: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-sketch
///
/// Validates the prompt, applies the daily usage cap, composes the final
/// engraving prompt (optionally refined by the text model) and submits the
/// job. The blocking profile runs the whole poll loop server-side and
/// returns `{image}`; the async profile returns `{id}` for GET polling.
pub async fn handle_generate_sketch(
    State(state): State<AppState>,
    Json(request): Json<SketchRequest>,
) -> Result<Json<SketchResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt is required".to_string()));
    }

    let backend = state
        .replicate
        .as_ref()
        .ok_or_else(|| AppError::Configuration("REPLICATE_API_TOKEN is not set".to_string()))?;

    let today = Utc::now().date_naive();
    state.limiter.check(today)?;

    let mask = match request.mask_image {
        Some(mask) => mask,
        None => load_mask_data_uri(&state.config.mask_path).await?,
    };

    // Refinement failure must not sink the sketch: fall back to the raw idea.
    let subject = match &state.llm {
        Some(llm) => match llm.refine_sketch_prompt(&request.prompt).await {
            Ok(refined) => refined,
            Err(e) => {
                warn!("prompt refinement failed, using the raw idea: {e}");
                request.prompt.clone()
            }
        },
        None => request.prompt.clone(),
    };
    let prompt = compose_sketch_prompt(&subject);

    if state.profile.block_until_done {
        let image = poller::generate(backend, state.profile, &prompt, Some(&mask)).await?;
        state.limiter.record(today);
        info!(profile = state.profile.name, "sketch generated");
        return Ok(Json(SketchResponse::Finished { image }));
    }

    let job = backend
        .submit(state.profile, state.profile.input(&prompt, Some(&mask)))
        .await?;
    info!(profile = state.profile.name, id = %job.id, "sketch job submitted");
    Ok(Json(SketchResponse::Queued { id: job.id }))
}

/// GET /api/generate-sketch?id=<id>
///
/// Proxies the provider's job snapshot to the polling client. A succeeded
/// snapshot counts toward the daily cap exactly once per job id.
pub async fn handle_sketch_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<Json<JobStatus>, AppError> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("id query parameter is required".to_string()))?;

    let backend = state
        .replicate
        .as_ref()
        .ok_or_else(|| AppError::Configuration("REPLICATE_API_TOKEN is not set".to_string()))?;

    let job = backend.status(&id).await?;

    if job.status == JobState::Succeeded {
        state.limiter.record_job(Utc::now().date_naive(), &job.id);
    }

    Ok(Json(job))
}

/// Reads the bundled blade mask and encodes it the way the browser would
/// hand it over, as a base64 PNG data URI.
async fn load_mask_data_uri(path: &str) -> Result<String, AppError> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("mask file not found at {path}"))?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(bytes)))
}
