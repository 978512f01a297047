//! Remote plan service client
//!
//! Sends the travel request as JSON to the configured endpoint and maps the
//! reply onto a [`TravelPlan`]. One POST per request, bounded by a timeout; no
//! retries.

mod error;
pub mod wire;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::RemoteConfig;
use crate::models::{TravelPlan, TravelRequest};
pub use error::RemotePlanError;
use wire::{PlanRequestBody, PlanResponse};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `User-Agent` used unless configured otherwise
pub const DEFAULT_USER_AGENT: &str = concat!("tripgen/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce a plan for a request over the network
#[async_trait]
pub trait PlanService: Send + Sync {
    async fn fetch_plan(&self, request: &TravelRequest) -> Result<TravelPlan, RemotePlanError>;
}

/// HTTP client for the plan service
#[derive(Debug, Clone)]
pub struct RemotePlanClient {
    client: Client,
    endpoint: String,
    user_agent: String,
}

impl RemotePlanClient {
    /// Create a client for `endpoint` with a request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_user_agent(endpoint, timeout, DEFAULT_USER_AGENT)
    }

    /// Create a client that identifies itself as `user_agent`
    pub fn with_user_agent(
        endpoint: impl Into<String>,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self> {
        let user_agent = user_agent.into();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.as_str())
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            user_agent,
        })
    }

    /// Create a client from the `[remote]` config section
    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        Self::with_user_agent(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_seconds),
            config.user_agent.clone(),
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl PlanService for RemotePlanClient {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn fetch_plan(&self, request: &TravelRequest) -> Result<TravelPlan, RemotePlanError> {
        info!("Requesting travel plan for departure from {}", request.origin);
        let start_time = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PlanRequestBody::from(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemotePlanError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        debug!("Plan service replied with {} bytes", text.len());
        let decoded: PlanResponse = serde_json::from_str(&text)?;
        let plan = decoded.into_plan(request)?;

        let elapsed = start_time.elapsed();
        info!(
            "Received {} destinations in {:.3}s",
            plan.destinations.len(),
            elapsed.as_secs_f64()
        );
        if elapsed.as_secs() > 5 {
            warn!("Slow plan service response: {:.3}s", elapsed.as_secs_f64());
        }

        Ok(plan)
    }
}
