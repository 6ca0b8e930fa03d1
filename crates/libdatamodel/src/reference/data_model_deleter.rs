use crate::error::ClassifiedError;
use crate::model::DataModelVersion;
use crate::reference::CleanupBackend;
use crate::reference::CleanupOptions;
use crate::reference::CleanupReport;
use crate::reference::DeletionPlan;
use crate::reference::Pager;
use crate::reference::ReferenceResolver;
use crate::reference::run_cleanup;

#[derive(Clone, Debug, PartialEq)]
pub struct DeletionOutcome {
    pub plan: DeletionPlan,
    pub report: CleanupReport,
}

/// Deletes a data model together with every view no other model uses.
pub struct DataModelDeleter<'a> {
    backend: &'a dyn CleanupBackend,
    data_models: &'a dyn Pager<DataModelVersion>,
    options: CleanupOptions,
}
impl<'a> DataModelDeleter<'a> {
    pub fn new(
        data_models: &'a dyn Pager<DataModelVersion>,
        backend: &'a dyn CleanupBackend,
    ) -> Self {
        Self {
            backend,
            data_models,
            options: CleanupOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CleanupOptions) -> Self {
        self.options = options;
        self
    }

    /// Fails only when listing data models fails; failed delete batches are
    /// reported in the returned [`CleanupReport`].
    pub async fn delete(
        &self,
        candidate: &DataModelVersion,
    ) -> Result<DeletionOutcome, ClassifiedError> {
        let plan = ReferenceResolver::plan_deletion(candidate, self.data_models).await?;
        let report = run_cleanup(self.backend, &plan, &self.options).await;
        if !report.is_complete() {
            log::warn!(
                "Data model `{}` was only partially deleted; {} batch(es) failed.",
                candidate.key(),
                report.failures().count(),
            );
        }
        Ok(DeletionOutcome { plan, report })
    }
}
