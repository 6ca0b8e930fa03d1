use crate::error::ClassifiedError;
use crate::error::ErrorClassifier;
use crate::error::SpaceLookup;
use crate::model::DataModelVersion;
use crate::model::visible_versions;

#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    async fn list_versions(
        &self,
        space: &str,
        external_id: &str,
    ) -> Result<Vec<DataModelVersion>, ClassifiedError>;
}

/// List the visible versions of a data model.
///
/// An empty listing is reported as a not-found error naming either the
/// model or its space, whichever is actually missing.
pub async fn load_versions(
    source: &dyn VersionSource,
    lookup: &dyn SpaceLookup,
    space: &str,
    external_id: &str,
) -> Result<Vec<DataModelVersion>, ClassifiedError> {
    let versions = source.list_versions(space, external_id).await?;
    if versions.is_empty() {
        return Err(
            ErrorClassifier::resolve_empty_version_listing(lookup, space, external_id).await
        );
    }
    log::debug!(
        "Loaded {} version(s) of data model `{space}:{external_id}`.",
        versions.len(),
    );
    Ok(visible_versions(versions))
}
