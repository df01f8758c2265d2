//! Submission errors and the messages shown for them

use thiserror::Error;

/// Confirmation shown after the backend accepted the record
pub const SUCCESS_MESSAGE: &str = "Votre formulaire a été envoyé avec succès !";

/// Shown when the backend refuses the record without saying why
pub const REJECTED_FALLBACK: &str = "Erreur lors de l'envoi du formulaire";

/// The request did not produce a usable response
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, DNS or I/O failure
    #[error("{0}")]
    Request(String),
    /// A body that should have been JSON was not
    #[error("invalid JSON response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Request(err.to_string())
    }
}

/// Why a submit attempt ended in the error state.
///
/// The `Display` output is the exact text shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{message}")]
    ServerRejected { status: u16, message: String },
    /// Shown as a fixed prefix followed by the failure description
    #[error("Erreur de connexion. Veuillez réessayer. {0}")]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Build a rejection from the server's `error` field, falling back to the
    /// fixed message when it is missing or empty.
    pub fn rejected(status: u16, server_message: Option<String>) -> Self {
        let message = server_message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
        SubmitError::ServerRejected { status, message }
    }
}
