//! Trait abstraction for the submission transport to enable mocking in tests

use super::error::TransportError;
use crate::state::FormRecord;
use async_trait::async_trait;

/// Status and body of an HTTP response, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one prospect record to the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadTransport: Send + Sync {
    /// Issue exactly one request carrying `record` as its JSON body
    async fn send(&self, record: &FormRecord) -> Result<RawResponse, TransportError>;
}
