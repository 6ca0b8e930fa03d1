use crate::error::ClassifiedError;
use crate::model::ContainerKey;
use crate::model::ModelKey;
use crate::model::ViewKey;
use crate::reference::DeletionPlan;
use futures::future::join_all;

/// Largest number of items the backend accepts in one delete call.
pub const MAX_CLEANUP_BATCH_SIZE: usize = 100;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Container,
    DataModelVersion,
    View,
}
impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Container => "container",
            Self::DataModelVersion => "data model version",
            Self::View => "view",
        })
    }
}

/// Batch deletion endpoints of the data-modeling backend.
#[async_trait::async_trait]
pub trait CleanupBackend: Send + Sync {
    async fn delete_containers(&self, containers: &[ContainerKey]) -> Result<(), ClassifiedError>;
    async fn delete_data_model_versions(&self, models: &[ModelKey]) -> Result<(), ClassifiedError>;
    async fn delete_views(&self, views: &[ViewKey]) -> Result<(), ClassifiedError>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CleanupOptions {
    /// Clamped to `1..=MAX_CLEANUP_BATCH_SIZE`.
    pub batch_size: usize,
}
impl CleanupOptions {
    pub fn batch_size(&self) -> usize {
        self.batch_size.clamp(1, MAX_CLEANUP_BATCH_SIZE)
    }
}
impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            batch_size: MAX_CLEANUP_BATCH_SIZE,
        }
    }
}

/// Result of one delete call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub batch_index: usize,
    pub items: Vec<String>,
    pub kind: ResourceKind,
    pub result: Result<(), ClassifiedError>,
}
impl BatchOutcome {
    fn new<K: std::fmt::Display>(
        kind: ResourceKind,
        batch_index: usize,
        batch: &[K],
        result: Result<(), ClassifiedError>,
    ) -> Self {
        if let Err(err) = &result {
            log::warn!(
                "Deleting {kind} batch #{batch_index} ({} item(s)) failed: {err}",
                batch.len(),
            );
        }
        Self {
            batch_index,
            items: batch.iter().map(ToString::to_string).collect(),
            kind,
            result,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-batch outcomes of a cleanup run. Batches that succeeded stay
/// deleted even when others failed.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct CleanupReport {
    pub(crate) outcomes: Vec<BatchOutcome>,
}
impl CleanupReport {
    pub fn failures(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(BatchOutcome::is_success)
    }

    pub fn outcomes(&self) -> &[BatchOutcome] {
        self.outcomes.as_slice()
    }
}

/// Delete everything `plan` marks for deletion.
///
/// Views, containers and data model versions are deleted by three
/// concurrent fan-outs, each issuing its batches concurrently. Nothing is
/// rolled back when a batch fails.
pub async fn run_cleanup(
    backend: &dyn CleanupBackend,
    plan: &DeletionPlan,
    options: &CleanupOptions,
) -> CleanupReport {
    let batch_size = options.batch_size();
    let views = plan.deletable_views().cloned().collect::<Vec<_>>();
    let containers = plan.container_keys();
    let model_versions = plan.model_versions();

    log::debug!(
        "Cleaning up {} view(s), {} container(s), {} data model version(s) in batches of {batch_size}.",
        views.len(),
        containers.len(),
        model_versions.len(),
    );

    let view_batches = join_all(
        views.chunks(batch_size).enumerate().map(|(batch_index, batch)| async move {
            let result = backend.delete_views(batch).await;
            BatchOutcome::new(ResourceKind::View, batch_index, batch, result)
        })
    );
    let container_batches = join_all(
        containers.chunks(batch_size).enumerate().map(|(batch_index, batch)| async move {
            let result = backend.delete_containers(batch).await;
            BatchOutcome::new(ResourceKind::Container, batch_index, batch, result)
        })
    );
    let model_version_batches = join_all(
        model_versions.chunks(batch_size).enumerate().map(|(batch_index, batch)| async move {
            let result = backend.delete_data_model_versions(batch).await;
            BatchOutcome::new(ResourceKind::DataModelVersion, batch_index, batch, result)
        })
    );

    let (views, containers, model_versions) =
        futures::join!(view_batches, container_batches, model_version_batches);

    CleanupReport {
        outcomes: views.into_iter()
            .chain(containers)
            .chain(model_versions)
            .collect(),
    }
}
