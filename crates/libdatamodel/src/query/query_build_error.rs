use thiserror::Error;

/// Contract violations detected while synthesizing a query document.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueryBuildError {
    #[error(
        "Inline type `{type_name}` declares the list-valued relation field \
        `{field_name}` and cannot be selected inline."
    )]
    InlineTypeWithRelationList {
        field_name: String,
        type_name: String,
    },

    #[error(
        "A nested cursor or filter was given for `{type_name}.{field_name}`, \
        which is not a list-valued relation field."
    )]
    InvalidNestedArgument {
        field_name: String,
        type_name: String,
    },

    #[error("At least one type name is required to build an aggregate query.")]
    NoTypesRequested,

    #[error("No type named `{type_name}` exists in this schema.")]
    UnknownType {
        type_name: String,
    },
}
