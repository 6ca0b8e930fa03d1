mod cleanup;
mod data_model_deleter;
mod deletion_plan;
mod pager;
mod reference_resolver;

pub use cleanup::BatchOutcome;
pub use cleanup::CleanupBackend;
pub use cleanup::CleanupOptions;
pub use cleanup::CleanupReport;
pub use cleanup::MAX_CLEANUP_BATCH_SIZE;
pub use cleanup::ResourceKind;
pub use cleanup::run_cleanup;
pub use data_model_deleter::DataModelDeleter;
pub use data_model_deleter::DeletionOutcome;
pub use deletion_plan::DeletionPlan;
pub use deletion_plan::ReferencedView;
pub use pager::Page;
pub use pager::Pager;
pub use pager::drain_pages;
pub use reference_resolver::ReferenceResolver;

#[cfg(test)]
mod tests;
