//! Submit controller
//!
//! Drives one submit attempt: enter the submitting state, send the record,
//! turn the response into an outcome and apply it to the form. The terminal
//! front-end uses [`SubmitController::spawn`], which runs the request on a
//! background task and reports back over a channel so the UI loop stays the
//! only place that mutates form state.

use crate::api::{LeadTransport, RawResponse, SubmitError, TransportError};
use crate::state::{FormRecord, FormState};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Result of one request, delivered back to the UI loop
pub type SubmitOutcome = Result<(), SubmitError>;

/// Decide what a response means.
///
/// A 2xx must carry a JSON body; anything else is a rejection whose message
/// comes from the body's `error` string when there is one.
pub fn interpret(response: RawResponse) -> SubmitOutcome {
    if response.is_success() {
        serde_json::from_str::<Value>(&response.body)
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        return Ok(());
    }

    let server_message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string));
    Err(SubmitError::rejected(response.status, server_message))
}

/// Send one record and interpret the answer
pub async fn deliver(transport: &dyn LeadTransport, record: &FormRecord) -> SubmitOutcome {
    let response = transport.send(record).await?;
    interpret(response)
}

fn log_outcome(outcome: &SubmitOutcome) {
    match outcome {
        Ok(()) => info!("Prospect form accepted"),
        Err(SubmitError::ServerRejected { status, .. }) => {
            warn!("Prospect form rejected with status {status}")
        }
        Err(SubmitError::Transport(err)) => warn!("Prospect form not delivered: {err}"),
    }
}

/// Enter the submitting state, yielding the record to send
fn begin(form: &mut FormState) -> Option<FormRecord> {
    let Some(record) = form.begin_submit() else {
        debug!("Submit ignored: required fields missing");
        return None;
    };
    info!(filled = record.filled_count(), "Submitting prospect form");
    Some(record)
}

async fn attempt(transport: &dyn LeadTransport, record: &FormRecord) -> SubmitOutcome {
    let outcome = deliver(transport, record).await;
    log_outcome(&outcome);
    outcome
}

/// Runs submit attempts against a transport
#[derive(Clone)]
pub struct SubmitController {
    transport: Arc<dyn LeadTransport>,
}

impl SubmitController {
    pub fn new(transport: Arc<dyn LeadTransport>) -> Self {
        Self { transport }
    }

    /// Run a full submit attempt in place.
    ///
    /// Returns `false` without sending anything when the form is not valid.
    #[cfg(test)]
    pub async fn submit(&self, form: &mut FormState) -> bool {
        let Some(record) = begin(form) else {
            return false;
        };
        let outcome = attempt(self.transport.as_ref(), &record).await;
        form.finish_submit(outcome);
        true
    }

    /// Start a submit attempt whose outcome arrives later on `outcomes`.
    ///
    /// The form enters the submitting state immediately; the caller applies
    /// the outcome with [`FormState::finish_submit`] when it is received.
    /// Returns `None` without sending anything when the form is not valid.
    pub fn spawn(
        &self,
        form: &mut FormState,
        outcomes: UnboundedSender<SubmitOutcome>,
    ) -> Option<JoinHandle<()>> {
        let record = begin(form)?;
        let transport = Arc::clone(&self.transport);
        Some(tokio::spawn(async move {
            let outcome = attempt(transport.as_ref(), &record).await;
            if outcomes.send(outcome).is_err() {
                debug!("Form closed before the response arrived; outcome dropped");
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockLeadTransport, REJECTED_FALLBACK, SUCCESS_MESSAGE};
    use crate::state::{FieldId, SubmissionStatus};
    use tokio::sync::mpsc;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.update(FieldId::FullName, "Jean Dupont");
        form.update(FieldId::Mobile, "0612345678");
        form.update(FieldId::Source, "Salon");
        form.update(FieldId::GraduationYear, "2023");
        form
    }

    fn controller_answering(status: u16, body: &'static str) -> SubmitController {
        let mut mock = MockLeadTransport::new();
        mock.expect_send()
            .times(1)
            .returning(move |_| Ok(RawResponse::new(status, body)));
        SubmitController::new(Arc::new(mock))
    }

    mod interpret_response {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_2xx_json_is_ok() {
            assert_eq!(interpret(RawResponse::new(200, r#"{"message":"sent"}"#)), Ok(()));
            assert_eq!(interpret(RawResponse::new(201, "{}")), Ok(()));
        }

        #[test]
        fn test_2xx_non_json_is_transport_failure() {
            let outcome = interpret(RawResponse::new(200, "<html>"));
            assert!(matches!(
                outcome,
                Err(SubmitError::Transport(TransportError::Decode(_)))
            ));
        }

        #[test]
        fn test_error_field_used_verbatim() {
            let outcome = interpret(RawResponse::new(429, r#"{"error":"Quota dépassé"}"#));
            assert_eq!(outcome.unwrap_err().to_string(), "Quota dépassé");
        }

        #[test]
        fn test_missing_error_field_falls_back() {
            let outcome = interpret(RawResponse::new(400, r#"{"detail":"nope"}"#));
            assert_eq!(outcome.unwrap_err().to_string(), REJECTED_FALLBACK);
        }

        #[test]
        fn test_non_string_error_field_falls_back() {
            let outcome = interpret(RawResponse::new(500, r#"{"error":42}"#));
            assert_eq!(outcome.unwrap_err().to_string(), REJECTED_FALLBACK);
        }

        #[test]
        fn test_unparseable_error_body_falls_back() {
            let outcome = interpret(RawResponse::new(502, "Bad Gateway"));
            assert_eq!(
                outcome,
                Err(SubmitError::ServerRejected {
                    status: 502,
                    message: REJECTED_FALLBACK.to_string(),
                })
            );
        }
    }

    mod submit_in_place {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_form_sends_nothing() {
            let mut mock = MockLeadTransport::new();
            mock.expect_send().times(0);
            let controller = SubmitController::new(Arc::new(mock));

            let mut form = FormState::new();
            form.update(FieldId::FullName, "Jean");
            form.update(FieldId::Mobile, "   ");
            form.update(FieldId::Source, "Salon");

            assert!(!controller.submit(&mut form).await);
            assert!(!form.is_submitting());
            assert_eq!(form.status, SubmissionStatus::Unset);
            assert_eq!(form.value(FieldId::FullName), "Jean");
        }

        #[tokio::test]
        async fn test_sends_current_record() {
            let mut mock = MockLeadTransport::new();
            mock.expect_send()
                .withf(|record| {
                    record.nom_prenom == "Jean Dupont"
                        && record.annee_du_bac == "2023"
                        && record.email.is_empty()
                })
                .times(1)
                .returning(|_| Ok(RawResponse::new(200, "{}")));
            let controller = SubmitController::new(Arc::new(mock));

            let mut form = filled();
            assert!(controller.submit(&mut form).await);
        }

        #[tokio::test]
        async fn test_success_resets_record() {
            let controller = controller_answering(200, r#"{"ok":true}"#);
            let mut form = filled();

            controller.submit(&mut form).await;

            assert!(form.record.is_empty());
            assert_eq!(
                form.status,
                SubmissionStatus::Success(SUCCESS_MESSAGE.to_string())
            );
            assert!(!form.is_submitting());
        }

        #[tokio::test]
        async fn test_server_error_message_keeps_record() {
            let controller = controller_answering(500, r#"{"error":"Quota dépassé"}"#);
            let mut form = filled();
            let before = form.record.clone();

            controller.submit(&mut form).await;

            assert_eq!(form.record, before);
            assert_eq!(
                form.status,
                SubmissionStatus::Error("Quota dépassé".to_string())
            );
            assert!(!form.is_submitting());
        }

        #[tokio::test]
        async fn test_rejection_without_message_uses_fallback() {
            let controller = controller_answering(422, "{}");
            let mut form = filled();

            controller.submit(&mut form).await;

            assert_eq!(
                form.status,
                SubmissionStatus::Error(REJECTED_FALLBACK.to_string())
            );
        }

        #[tokio::test]
        async fn test_transport_failure_keeps_record() {
            let mut mock = MockLeadTransport::new();
            mock.expect_send()
                .times(1)
                .returning(|_| Err(TransportError::Request("connection refused".to_string())));
            let controller = SubmitController::new(Arc::new(mock));
            let mut form = filled();
            let before = form.record.clone();

            controller.submit(&mut form).await;

            assert_eq!(form.record, before);
            assert_eq!(
                form.status,
                SubmissionStatus::Error(
                    "Erreur de connexion. Veuillez réessayer. connection refused".to_string()
                )
            );
            assert!(!form.is_submitting());
        }

        #[tokio::test]
        async fn test_retry_after_failure_sends_again() {
            let mut mock = MockLeadTransport::new();
            let mut seq = mockall::Sequence::new();
            mock.expect_send()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Err(TransportError::Request("timeout".to_string())));
            mock.expect_send()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(RawResponse::new(200, "{}")));
            let controller = SubmitController::new(Arc::new(mock));
            let mut form = filled();

            controller.submit(&mut form).await;
            assert!(form.status.is_error());
            controller.submit(&mut form).await;
            assert!(form.status.is_success());
            assert!(form.record.is_empty());
        }
    }

    mod spawned {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_flag_held_until_outcome_applied() {
            let controller = controller_answering(200, "{}");
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut form = filled();

            let task = controller.spawn(&mut form, tx).unwrap();
            assert!(form.is_submitting());
            assert_eq!(form.status, SubmissionStatus::Unset);

            task.await.unwrap();
            let outcome = rx.recv().await.unwrap();
            assert!(form.is_submitting());
            form.finish_submit(outcome);

            assert!(!form.is_submitting());
            assert!(form.status.is_success());
            assert!(form.record.is_empty());
        }

        #[tokio::test]
        async fn test_invalid_form_spawns_nothing() {
            let mut mock = MockLeadTransport::new();
            mock.expect_send().times(0);
            let controller = SubmitController::new(Arc::new(mock));
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut form = FormState::new();

            assert!(controller.spawn(&mut form, tx).is_none());
            assert!(!form.is_submitting());
            assert!(rx.recv().await.is_none());
        }

        #[tokio::test]
        async fn test_closed_receiver_is_tolerated() {
            let controller = controller_answering(400, r#"{"error":"x"}"#);
            let (tx, rx) = mpsc::unbounded_channel();
            drop(rx);
            let mut form = filled();

            let task = controller.spawn(&mut form, tx).unwrap();
            task.await.unwrap();
            assert!(form.is_submitting());
        }
    }
}
