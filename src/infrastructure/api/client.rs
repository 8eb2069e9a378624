//! Pack calculator HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url, header};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use super::dto::{
    CalculateRequest, CalculateResponse, CreateSizeRequest, PackSizeResponse, PackSizesResponse,
};
use crate::domain::{
    CalculationResult, CatalogOperation, CatalogPort, GatewayError, PackId, PackSize,
};

const USER_AGENT: &str = concat!("packdesk/", env!("CARGO_PKG_VERSION"));
const JSON: &str = "application/json";

/// HTTP client construction errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL does not parse.
    #[error("invalid server URL {url}: {reason}")]
    InvalidBaseUrl {
        /// URL as configured.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// reqwest could not build the client.
    #[error("failed to create HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Client for the pack calculator service.
pub struct PackApiClient {
    client: Client,
    base_url: String,
}

impl PackApiClient {
    /// Creates client for `base_url` with a transport timeout.
    ///
    /// # Errors
    /// Returns error if the URL is not absolute http(s) or the HTTP client
    /// cannot be created.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the server base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(
        &self,
        operation: CatalogOperation,
        request: RequestBuilder,
    ) -> Result<Response, GatewayError> {
        let response = request
            .header(header::ACCEPT, JSON)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, %operation, "Request to pack service failed");
                if e.is_timeout() {
                    GatewayError::transport(operation, "request timed out")
                } else if e.is_connect() {
                    GatewayError::transport(operation, "failed to connect to pack service")
                } else {
                    GatewayError::transport(operation, e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(
            %operation,
            status = status.as_u16(),
            body = %body.trim(),
            "Pack service rejected request"
        );
        Err(GatewayError::status(operation, status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(
        operation: CatalogOperation,
        response: Response,
    ) -> Result<T, GatewayError> {
        let body = response.text().await.map_err(|e| {
            warn!(error = %e, %operation, "Failed to read pack service response");
            GatewayError::transport(operation, e.to_string())
        })?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(
                error = %e,
                %operation,
                body_len = body.len(),
                "Failed to parse pack service response"
            );
            GatewayError::decode(operation, e.to_string())
        })
    }
}

#[async_trait]
impl CatalogPort for PackApiClient {
    async fn list_packs(&self) -> Result<Vec<PackSize>, GatewayError> {
        let operation = CatalogOperation::ListPacks;
        let request = self.client.get(self.endpoint("/api/packs"));
        let response = self.send(operation, request).await?;
        let body: PackSizesResponse = Self::decode(operation, response).await?;

        let packs: Vec<PackSize> = body
            .packs
            .unwrap_or_default()
            .into_iter()
            .map(PackSize::from)
            .collect();
        debug!(count = packs.len(), "Fetched pack sizes");
        Ok(packs)
    }

    async fn add_pack(&self, size: u64) -> Result<PackSize, GatewayError> {
        let operation = CatalogOperation::AddPack;
        let request = self
            .client
            .post(self.endpoint("/api/sizes"))
            .json(&CreateSizeRequest { size });
        let response = self.send(operation, request).await?;
        let created: PackSizeResponse = Self::decode(operation, response).await?;
        Ok(created.into())
    }

    async fn delete_pack(&self, id: PackId) -> Result<(), GatewayError> {
        let operation = CatalogOperation::DeletePack;
        let request = self
            .client
            .delete(self.endpoint(&format!("/api/sizes/{id}")));
        self.send(operation, request).await?;
        Ok(())
    }

    async fn calculate(&self, amount: u64) -> Result<CalculationResult, GatewayError> {
        let operation = CatalogOperation::Calculate;
        let request = self
            .client
            .post(self.endpoint("/api/calc"))
            .json(&CalculateRequest { amount });
        let response = self.send(operation, request).await?;
        let body: CalculateResponse = Self::decode(operation, response).await?;
        Ok(body.into())
    }
}
