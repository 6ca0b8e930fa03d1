use crate::error::BackendErrorPayload;
use crate::error::ClassifiedError;
use crate::error::DmlError;
use crate::error::ErrorKind;
use crate::error::SpaceLookup;
use crate::error::ValidationError;

pub const DML_PUBLISH_FAILED_MESSAGE: &str =
    "An error has occured. Data model was not published.";

const BREAKING_CHANGES_MARKER: &str = "breaking changes";

/// Maps backend error payloads onto [`ErrorKind`]s.
///
/// Status code decides first; a 400 is then refined by sniffing its
/// content. Classification is pure and never fails.
pub struct ErrorClassifier;
impl ErrorClassifier {
    pub fn classify(payload: &BackendErrorPayload) -> ClassifiedError {
        let breaking_changes = payload.errors.iter()
            .filter(|err| err.breaking_change_info().is_some())
            .collect::<Vec<_>>();
        if !breaking_changes.is_empty() {
            return ClassifiedError::new(
                ErrorKind::BreakingChange,
                breaking_change_list(&breaking_changes),
            ).with_status(payload.status);
        }

        let kind = match payload.status {
            400 if mentions_breaking_changes(payload) => ErrorKind::BreakingChange,
            400 if payload.missing.is_some() => ErrorKind::NotFound,
            400 | 409 => ErrorKind::Validation,
            401 => ErrorKind::NotAuthenticated,
            403 => ErrorKind::NotAuthorized,
            404 => ErrorKind::NotFound,
            500 => ErrorKind::ServerError,
            _ => ErrorKind::Unknown,
        };

        let message = match payload.resolved_message() {
            "" => fallback_message(kind, payload),
            message => message.to_string(),
        };

        log::debug!("Classified backend error (status {}) as {kind}.", payload.status);
        ClassifiedError::new(kind, message).with_status(payload.status)
    }

    /// `None` when publishing produced no DML errors.
    pub fn classify_dml_errors(errors: Vec<DmlError>) -> Option<ClassifiedError> {
        if errors.is_empty() {
            return None;
        }
        Some(ClassifiedError::dml(DML_PUBLISH_FAILED_MESSAGE, errors))
    }

    /// An empty version listing for `model` is ambiguous: either the model
    /// or its whole space is missing. Ask `lookup` which, and report a
    /// [`ErrorKind::NotFound`] naming it.
    ///
    /// A failed space check is returned as-is.
    pub async fn resolve_empty_version_listing(
        lookup: &dyn SpaceLookup,
        space: &str,
        model: &str,
    ) -> ClassifiedError {
        match lookup.space_exists(space).await {
            Ok(true) => ClassifiedError::new(
                ErrorKind::NotFound,
                format!("Data model `{model}` does not exist in space `{space}`."),
            ),
            Ok(false) => ClassifiedError::new(
                ErrorKind::NotFound,
                format!("Space `{space}` does not exist."),
            ),
            Err(err) => err,
        }
    }
}

fn mentions_breaking_changes(payload: &BackendErrorPayload) -> bool {
    payload.message.contains(BREAKING_CHANGES_MARKER)
        || payload.error_message.as_deref()
            .is_some_and(|msg| msg.contains(BREAKING_CHANGES_MARKER))
}

fn breaking_change_list(errors: &[&ValidationError]) -> String {
    let mut message = "Breaking change(s):".to_string();
    for err in errors {
        let description =
            if !err.message.is_empty() {
                err.message.to_string()
            } else {
                match err.breaking_change_info() {
                    Some(serde_json::Value::String(info)) => info.to_string(),
                    Some(info) => info.to_string(),
                    None => String::new(),
                }
            };
        message.push_str("\n- ");
        message.push_str(&description);
    }
    message
}

fn fallback_message(kind: ErrorKind, payload: &BackendErrorPayload) -> String {
    match kind {
        ErrorKind::NotFound => match &payload.missing {
            Some(missing) if !missing.is_empty() => {
                let resources = missing.iter()
                    .map(|ids| {
                        ids.iter()
                            .map(|(key, value)| match value {
                                serde_json::Value::String(value) => format!("{key}={value}"),
                                value => format!("{key}={value}"),
                            })
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("Resource not found: {resources}")
            },
            _ => "Resource not found.".to_string(),
        },
        ErrorKind::NotAuthenticated => "You are not signed in.".to_string(),
        ErrorKind::NotAuthorized =>
            "You do not have access to this resource.".to_string(),
        ErrorKind::ServerError => "The server failed to process the request.".to_string(),
        ErrorKind::Validation => "The request is invalid.".to_string(),
        ErrorKind::BreakingChange
            | ErrorKind::DmlError
            | ErrorKind::Unknown => format!("Unexpected error (status {}).", payload.status),
    }
}
