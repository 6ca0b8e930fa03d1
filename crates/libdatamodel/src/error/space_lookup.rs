use crate::error::ClassifiedError;

/// Existence check for a space, used to tell a missing data model apart
/// from a missing space.
#[async_trait::async_trait]
pub trait SpaceLookup: Send + Sync {
    async fn space_exists(&self, space: &str) -> Result<bool, ClassifiedError>;
}
