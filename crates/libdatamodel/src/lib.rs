pub mod ast;
pub mod builtin_types;
pub mod error;
pub mod model;
pub mod query;
pub mod reference;
pub mod schema;

pub use builtin_types::BuiltInType;
pub use builtin_types::BuiltInTypeRegistry;
pub use error::ClassifiedError;
pub use error::ErrorClassifier;
pub use error::ErrorKind;
pub use model::DataModelVersion;
pub use query::QuerySynthesizer;
pub use reference::DataModelDeleter;
pub use reference::ReferenceResolver;
pub use schema::SchemaMutator;
pub use schema::TypeGraph;
