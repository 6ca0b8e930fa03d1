mod backend_error_payload;
mod classified_error;
mod dml_error;
mod error_classifier;
mod error_kind;
mod space_lookup;

pub use backend_error_payload::BackendErrorPayload;
pub use backend_error_payload::ValidationError;
pub use backend_error_payload::ValidationErrorExtensions;
pub use classified_error::ClassifiedError;
pub use dml_error::DmlError;
pub use dml_error::DmlErrorLocation;
pub use error_classifier::DML_PUBLISH_FAILED_MESSAGE;
pub use error_classifier::ErrorClassifier;
pub use error_kind::ErrorKind;
pub use space_lookup::SpaceLookup;
