use thiserror::Error;

/// Contract violations raised while building or editing a
/// [`TypeGraph`](crate::schema::TypeGraph).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error(
        "Field `{type_name}.{field_name}` references `{referenced_type}`, \
        which is neither a built-in type nor defined in this schema."
    )]
    DanglingTypeReference {
        field_name: String,
        referenced_type: String,
        type_name: String,
    },

    #[error("Type `{type_name}` already defines a field named `{field_name}`.")]
    DuplicateFieldName {
        field_name: String,
        type_name: String,
    },

    #[error("A type named `{type_name}` already exists.")]
    DuplicateTypeName {
        type_name: String,
    },

    #[error("Your Data Model Schema is empty")]
    EmptySchema,

    #[error(
        "Inline type `{type_name}` must not declare the list-valued relation \
        field `{field_name}`."
    )]
    InlineTypeWithRelationList {
        field_name: String,
        type_name: String,
    },

    #[error("`{field_name}` is not a valid field name on type `{type_name}`.")]
    InvalidFieldName {
        field_name: String,
        type_name: String,
    },

    #[error("`{type_name}` is not a valid type name.")]
    InvalidTypeName {
        type_name: String,
    },

    #[error("Type `{type_name}` is stored under the mismatched key `{key}`.")]
    MismatchedTypeKey {
        key: String,
        type_name: String,
    },

    #[error("Failed to parse schema: {err}")]
    ParseError {
        err: String,
    },

    #[error("`{type_name}` is the name of a built-in type or directive.")]
    ReservedTypeName {
        type_name: String,
    },

    #[error("Type `{type_name}` has no field named `{field_name}`.")]
    UnknownField {
        field_name: String,
        type_name: String,
    },

    #[error("No type named `{type_name}` exists in this schema.")]
    UnknownType {
        type_name: String,
    },

    #[error(
        "Field `{type_name}.{field_name}` uses a nested list type, which is \
        not supported."
    )]
    UnsupportedNestedList {
        field_name: String,
        type_name: String,
    },
}
