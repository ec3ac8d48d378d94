use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production.
    pub llm: Arc<dyn ChatCompletion>,
    pub config: Config,
}
