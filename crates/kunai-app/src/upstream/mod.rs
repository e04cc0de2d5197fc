//! ## Summary
//! Fetching the calendar being proxied.
//!
//! One [`UpstreamClient`] is built at startup and shared through the depot,
//! so every request reuses the same connection pool and timeout.

use kunai_core::config::UpstreamConfig;
use kunai_core::constants::SERVICE_NAME;
use kunai_core::error::CoreError;
use reqwest::{StatusCode, Url};
use salvo::async_trait;

use crate::error::{AppError, AppResult};

/// HTTP client for upstream calendar feeds.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    /// ## Summary
    /// Builds a client with the configured whole-request timeout and a
    /// `kunai/<version>` user agent.
    ///
    /// ## Errors
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("{SERVICE_NAME}/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// ## Summary
    /// Downloads the body at `url`.
    ///
    /// ## Errors
    /// Returns [`AppError::UpstreamError`] on transport failures and timeouts,
    /// and [`AppError::UpstreamStatus`] for any status other than 200.
    #[tracing::instrument(skip(self), fields(url = %url))]
    pub async fn fetch(&self, url: &Url) -> AppResult<Vec<u8>> {
        tracing::debug!("Fetching upstream calendar");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = %status, "Upstream returned non-OK status");
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        tracing::debug!(bytes = body.len(), "Upstream calendar fetched");

        Ok(body.to_vec())
    }
}

pub struct UpstreamHandler {
    pub client: UpstreamClient,
}

#[async_trait]
impl salvo::Handler for UpstreamHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.client.clone());
    }
}

/// ## Summary
/// Retrieves the upstream client from the depot.
///
/// ## Errors
/// Returns an error if the client is not found in the depot.
pub fn get_upstream_from_depot(depot: &salvo::Depot) -> AppResult<UpstreamClient> {
    depot
        .obtain::<UpstreamClient>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Upstream client not found in depot").into())
}
