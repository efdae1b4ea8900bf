//! HTTP implementation of the readiness API client.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ConfigError};

use super::ReadinessApi;
use super::types::{
    ContactRequest, ContactResponse, ErrorBody, EvaluateRequest, EvaluateResponse, PlanRequest,
    PlanResponse, StatsResponse,
};

/// Readiness API client backed by `reqwest`.
///
/// One shared connection pool for all calls; the per-request timeout comes
/// from [`ApiConfig`].
pub struct HttpReadinessApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpReadinessApi {
    pub fn new(config: ApiConfig) -> Result<Self, ConfigError> {
        url::Url::parse(&config.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                key: "request_timeout".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { config, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }

        resp.json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ReadinessApi for HttpReadinessApi {
    async fn fetch_plan(&self, request: PlanRequest) -> Result<PlanResponse, ApiError> {
        tracing::debug!(skill = %request.primary_skill, "Requesting evaluation plan");
        self.post_json("/interview-ready/plan", &request).await
    }

    async fn evaluate(&self, request: EvaluateRequest) -> Result<EvaluateResponse, ApiError> {
        tracing::debug!(questions = request.questions.len(), "Submitting answers");
        self.post_json("/interview-ready/evaluate", &request).await
    }

    async fn fetch_stats(&self) -> Result<StatsResponse, ApiError> {
        let resp = self
            .client
            .get(self.endpoint("/interview-ready/stats"))
            .send()
            .await
            .map_err(map_transport_error)?;

        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }

        resp.json::<StatsResponse>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn track_page_view(&self) -> Result<(), ApiError> {
        // Fire-and-forget beacon: the response status is not checked.
        self.client
            .post(self.endpoint("/interview-ready/track"))
            .send()
            .await
            .map_err(map_transport_error)?;
        Ok(())
    }

    async fn submit_contact(&self, request: ContactRequest) -> Result<ContactResponse, ApiError> {
        self.post_json("/contact/submit", &request).await
    }
}

/// Map a reqwest transport failure (no HTTP response) onto the taxonomy.
fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(e.to_string())
    }
}

/// Map a non-2xx response onto the taxonomy, reading the body for
/// structured validation detail when the status alone doesn't decide.
async fn error_from_response(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    match status {
        429 => ApiError::RateLimited,
        504 => ApiError::Timeout,
        s if s >= 500 => ApiError::Server { status: s },
        _ => {
            let body = resp.json::<ErrorBody>().await.unwrap_or_default();
            ApiError::Rejected(
                body.into_message()
                    .unwrap_or_else(|| "Request failed.".to_string()),
            )
        }
    }
}
