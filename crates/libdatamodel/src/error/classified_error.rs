use crate::error::BackendErrorPayload;
use crate::error::DmlError;
use crate::error::ErrorClassifier;
use crate::error::ErrorKind;
use thiserror::Error;

/// A backend-reported failure reduced to a stable [`ErrorKind`] plus a
/// human-readable message.
#[derive(Clone, Debug, Error, PartialEq, serde::Serialize)]
#[error("{kind}: {message}")]
pub struct ClassifiedError {
    pub(crate) dml_errors: Vec<DmlError>,
    pub(crate) kind: ErrorKind,
    pub(crate) message: String,
    pub(crate) status: Option<u16>,
}
impl ClassifiedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            dml_errors: vec![],
            kind,
            message: message.into(),
            status: None,
        }
    }

    /// A [`ErrorKind::DmlError`] carrying the individual compilation errors.
    pub fn dml(message: impl Into<String>, dml_errors: Vec<DmlError>) -> Self {
        Self {
            dml_errors,
            ..Self::new(ErrorKind::DmlError, message)
        }
    }

    pub fn from_payload(payload: &BackendErrorPayload) -> Self {
        ErrorClassifier::classify(payload)
    }

    /// Parse and classify a raw JSON error payload. Text that is not a
    /// payload classifies as [`ErrorKind::Unknown`] with the text itself as
    /// the message.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<BackendErrorPayload>(text) {
            Ok(payload) => ErrorClassifier::classify(&payload),
            Err(err) => {
                log::debug!("Backend error payload is not valid JSON: {err}");
                Self::new(ErrorKind::Unknown, text)
            },
        }
    }

    pub(crate) fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn dml_errors(&self) -> &[DmlError] {
        self.dml_errors.as_slice()
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// HTTP status of the payload this error was classified from, if any.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}
