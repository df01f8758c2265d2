//! HTTP client for the prospect submission endpoint
//!
//! Posts the record as JSON and hands back the raw status and body. Deciding
//! what the response means is left to the submit controller.

use super::error::TransportError;
use super::traits::{LeadTransport, RawResponse};
use crate::state::FormRecord;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// Submission endpoint
pub const ENDPOINT: &str = "http://localhost:8000/api/send-email";

/// Transport backed by `reqwest`
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport targeting the submission endpoint
    pub fn new() -> Result<Self> {
        Self::with_endpoint(ENDPOINT)
    }

    /// Create a transport targeting another address
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        // No request timeout: the call waits on the OS transport.
        // The endpoint is local, so system proxies are bypassed.
        let client = reqwest::Client::builder().no_proxy().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadTransport for HttpTransport {
    async fn send(&self, record: &FormRecord) -> Result<RawResponse, TransportError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Response {status} ({} bytes)", body.len());

        Ok(RawResponse::new(status, body))
    }
}
