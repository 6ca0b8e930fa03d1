use crate::error::ClassifiedError;
use crate::error::ErrorKind;
use crate::error::SpaceLookup;
use crate::model::DataModelVersion;
use crate::model::VersionSource;
use crate::model::ViewKey;
use crate::model::load_versions;
use crate::model::visible_versions;

fn version(version: &str, schema: &str) -> DataModelVersion {
    DataModelVersion {
        created_time: 0,
        external_id: "Blog".to_string(),
        schema: schema.to_string(),
        space: "blog".to_string(),
        version: version.to_string(),
        views: vec![],
    }
}

#[test]
fn creation_draft_is_hidden() {
    let versions = visible_versions(vec![
        version("1", ""),
        version("2", "type Post { title: String }"),
    ]);

    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].version, "2");
}

#[test]
fn only_exact_draft_shape_is_hidden() {
    let kept = vec![
        version("1", "type Post { title: String }"),
        version("2", ""),
        version("1.0", ""),
        version("1", " "),
    ];

    assert_eq!(visible_versions(kept.clone()), kept);
}

#[test]
fn deserializes_backend_shape() {
    let version: DataModelVersion = serde_json::from_value(serde_json::json!({
        "space": "blog",
        "externalId": "Blog",
        "version": "3",
        "createdTime": 1_700_000_000_000i64,
        "views": [{"space": "blog", "externalId": "Post", "version": "2"}],
    })).unwrap();

    assert!(version.schema.is_empty());
    assert_eq!(version.views, vec![ViewKey::new("blog", "Post", "2")]);
    assert_eq!(version.key().to_string(), "blog:Blog/3");
}

struct FakeBackend {
    spaces: Vec<&'static str>,
    versions: Vec<DataModelVersion>,
}
#[async_trait::async_trait]
impl VersionSource for FakeBackend {
    async fn list_versions(
        &self,
        space: &str,
        external_id: &str,
    ) -> Result<Vec<DataModelVersion>, ClassifiedError> {
        Ok(
            self.versions.iter()
                .filter(|v| v.space == space && v.external_id == external_id)
                .cloned()
                .collect()
        )
    }
}
#[async_trait::async_trait]
impl SpaceLookup for FakeBackend {
    async fn space_exists(&self, space: &str) -> Result<bool, ClassifiedError> {
        Ok(self.spaces.iter().any(|existing| *existing == space))
    }
}

#[tokio::test]
async fn load_versions_filters_drafts() {
    let backend = FakeBackend {
        spaces: vec!["blog"],
        versions: vec![version("1", ""), version("2", "type A")],
    };

    let versions = load_versions(&backend, &backend, "blog", "Blog").await.unwrap();

    assert_eq!(versions, vec![version("2", "type A")]);
}

#[tokio::test]
async fn load_versions_keeps_model_with_only_a_draft() {
    let backend = FakeBackend {
        spaces: vec!["blog"],
        versions: vec![version("1", "")],
    };

    let versions = load_versions(&backend, &backend, "blog", "Blog").await.unwrap();

    assert!(versions.is_empty());
}

#[tokio::test]
async fn load_versions_reports_missing_space() {
    let backend = FakeBackend { spaces: vec![], versions: vec![] };

    let err = load_versions(&backend, &backend, "blog", "Blog").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.message(), "Space `blog` does not exist.");
}

#[tokio::test]
async fn load_versions_reports_missing_model() {
    let backend = FakeBackend { spaces: vec!["blog"], versions: vec![] };

    let err = load_versions(&backend, &backend, "blog", "Blog").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.message().contains("`Blog`"));
}
