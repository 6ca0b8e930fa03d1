mod field_def;
mod schema_error;
mod schema_mutator;
pub(crate) mod schema_syntax;
mod type_def;
mod type_graph;

pub use field_def::FieldArgument;
pub use field_def::FieldDef;
pub use field_def::FieldType;
pub use schema_error::SchemaError;
pub use schema_mutator::FieldProps;
pub use schema_mutator::FieldUpdates;
pub use schema_mutator::SchemaMutator;
pub use schema_mutator::TypeUpdates;
pub use schema_syntax::GraphQLSchemaSyntax;
pub use schema_syntax::SchemaSyntax;
pub use schema_syntax::ViewVersion;
pub use type_def::DirectiveAnnotation;
pub use type_def::INLINE_TYPE_DIRECTIVE_NAME;
pub use type_def::TypeDef;
pub use type_def::TypeKind;
pub use type_graph::TypeGraph;

#[cfg(test)]
mod tests;
