mod compiled_query;
mod operation_kind;
mod query_build_error;
mod query_params;
mod query_synthesizer;
mod selection;

pub use compiled_query::CompiledQuery;
pub use operation_kind::OperationKind;
pub use query_build_error::QueryBuildError;
pub use query_params::DEFAULT_NESTED_LIMIT;
pub use query_params::GetByIdQueryParams;
pub use query_params::ListQueryParams;
pub use query_params::SearchQueryParams;
pub use query_params::SortDirection;
pub use query_params::SortSpec;
pub use query_synthesizer::PAGE_INFO_FIELD_NAMES;
pub use query_synthesizer::QuerySynthesizer;
pub use query_synthesizer::SYSTEM_FIELD_NAMES;

#[cfg(test)]
mod tests;
