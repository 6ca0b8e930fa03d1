use crate::model::ModelKey;
use crate::model::ViewKey;

/// Version a data model is given on creation, before anything is published.
const DRAFT_VERSION: &str = "1";

/// One published (or draft) version of a data model.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModelVersion {
    #[serde(default)]
    pub created_time: i64,
    pub external_id: String,
    /// GraphQL DML body of this version.
    #[serde(default)]
    pub schema: String,
    pub space: String,
    pub version: String,
    #[serde(default)]
    pub views: Vec<ViewKey>,
}
impl DataModelVersion {
    pub fn key(&self) -> ModelKey {
        ModelKey::new(
            self.space.as_str(),
            self.external_id.as_str(),
            self.version.as_str(),
        )
    }

    /// The placeholder version written when a model is created: version
    /// exactly `"1"` with an empty schema body.
    pub fn is_creation_draft(&self) -> bool {
        self.version == DRAFT_VERSION && self.schema.is_empty()
    }
}

/// Drop creation drafts, keeping every other version in order.
pub fn visible_versions(versions: Vec<DataModelVersion>) -> Vec<DataModelVersion> {
    versions.into_iter()
        .filter(|version| !version.is_creation_draft())
        .collect()
}
