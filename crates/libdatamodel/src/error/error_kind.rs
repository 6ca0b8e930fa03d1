/// Stable taxonomy every backend failure is classified into. Callers branch
/// on this tag rather than on message text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    BreakingChange,
    DmlError,
    NotAuthenticated,
    NotAuthorized,
    NotFound,
    ServerError,
    Unknown,
    Validation,
}
impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BreakingChange => "BREAKING_CHANGE",
            Self::DmlError => "DML_ERROR",
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::NotAuthorized => "NOT_AUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::ServerError => "SERVER_ERROR",
            Self::Unknown => "UNKNOWN",
            Self::Validation => "VALIDATION",
        }
    }
}
impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
