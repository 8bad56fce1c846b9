use std::sync::Arc;

use crate::config::Config;
use crate::generation::limiter::UsageLimiter;
use crate::generation::profile::ProviderProfile;
use crate::generation::replicate::ReplicateClient;
use crate::llm_client::LlmClient;
use crate::store::KvStore;
use crate::telegram::TelegramNotifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Image generation backend. `None` until REPLICATE_API_TOKEN is
    /// provided; requests that need it surface a configuration error.
    pub replicate: Option<ReplicateClient>,
    /// Optional prompt-refinement LLM.
    pub llm: Option<LlmClient>,
    /// Outbound Telegram notifier for the webhook's `/start` reply.
    pub telegram: Option<TelegramNotifier>,
    /// Backing store for the per-day keys (daily card, usage counter).
    pub store: Arc<dyn KvStore>,
    pub limiter: UsageLimiter,
    /// Provider profile driving sketch generation, chosen at startup.
    pub profile: &'static ProviderProfile,
}
