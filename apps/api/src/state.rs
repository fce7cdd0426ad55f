use std::sync::Arc;

use crate::generation::Orchestrator;
use crate::quota::QuotaTracker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    /// Same tracker the orchestrator consumes from; read by `GET /api/quota`.
    pub quota: Arc<QuotaTracker>,
}
