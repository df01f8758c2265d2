//! Submission transport: HTTP client, its trait seam and error types

mod client;
mod error;
mod traits;

pub use client::{HttpTransport, ENDPOINT};
pub use error::{SubmitError, TransportError, REJECTED_FALLBACK, SUCCESS_MESSAGE};
pub use traits::{LeadTransport, RawResponse};

#[cfg(test)]
pub use traits::MockLeadTransport;
