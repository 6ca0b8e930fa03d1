/// An error response as reported by the data-modeling backend.
///
/// Every field is optional on the wire; absent fields deserialize to their
/// empty value so that a partial payload still classifies.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackendErrorPayload {
    pub error_message: Option<String>,
    pub errors: Vec<ValidationError>,
    pub message: String,
    /// Identifiers of the resources the request referred to but which do
    /// not exist.
    pub missing: Option<Vec<serde_json::Map<String, serde_json::Value>>>,
    pub status: u16,
}
impl BackendErrorPayload {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            ..Self::default()
        }
    }

    /// `errorMessage` when present and non-empty, otherwise `message`.
    pub fn resolved_message(&self) -> &str {
        match self.error_message.as_deref() {
            Some(error_message) if !error_message.is_empty() => error_message,
            _ => self.message.as_str(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ValidationError {
    pub extensions: Option<ValidationErrorExtensions>,
    pub message: String,
}
impl ValidationError {
    pub fn breaking_change_info(&self) -> Option<&serde_json::Value> {
        self.extensions.as_ref()?.breaking_change_info.as_ref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationErrorExtensions {
    pub breaking_change_info: Option<serde_json::Value>,
}
