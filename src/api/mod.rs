//! Readiness service client.
//!
//! The wizard talks to the remote service through the [`ReadinessApi`]
//! trait so tests can substitute a stub; [`HttpReadinessApi`] is the real
//! `reqwest`-backed implementation.

pub mod client;
pub mod types;

pub use client::HttpReadinessApi;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::ApiError;

use types::{
    ContactRequest, ContactResponse, EvaluateRequest, EvaluateResponse, PlanRequest, PlanResponse,
    StatsResponse,
};

/// Client surface of the readiness service.
///
/// `fetch_plan` and `evaluate` are the two wizard calls; `fetch_stats`,
/// `track_page_view`, and `submit_contact` are the auxiliary endpoints.
#[async_trait]
pub trait ReadinessApi: Send + Sync {
    /// POST `/interview-ready/plan` — personalized question plan.
    async fn fetch_plan(&self, request: PlanRequest) -> Result<PlanResponse, ApiError>;

    /// POST `/interview-ready/evaluate` — score the submitted answers.
    async fn evaluate(&self, request: EvaluateRequest) -> Result<EvaluateResponse, ApiError>;

    /// GET `/interview-ready/stats` — usage counter; callers tolerate failure.
    async fn fetch_stats(&self) -> Result<StatsResponse, ApiError>;

    /// POST `/interview-ready/track` — fire-and-forget page-view beacon.
    async fn track_page_view(&self) -> Result<(), ApiError>;

    /// POST `/contact/submit` — contact form (outside the wizard flow).
    async fn submit_contact(&self, request: ContactRequest) -> Result<ContactResponse, ApiError>;
}

/// Create the HTTP client from configuration.
pub fn create_client(config: ApiConfig) -> crate::error::Result<Arc<dyn ReadinessApi>> {
    tracing::info!(base_url = %config.base_url, "Using readiness API");
    let client = HttpReadinessApi::new(config)?;
    Ok(Arc::new(client))
}
