/// Composite identity of one version of a view.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewKey {
    pub external_id: String,
    pub space: String,
    pub version: String,
}
impl ViewKey {
    pub fn new(
        space: impl Into<String>,
        external_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            space: space.into(),
            version: version.into(),
        }
    }

    /// The container backing this view: same space and externalId.
    pub fn container_key(&self) -> ContainerKey {
        ContainerKey::new(self.space.as_str(), self.external_id.as_str())
    }
}
impl std::fmt::Display for ViewKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}/{}", self.space, self.external_id, self.version)
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerKey {
    pub external_id: String,
    pub space: String,
}
impl ContainerKey {
    pub fn new(space: impl Into<String>, external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            space: space.into(),
        }
    }
}
impl std::fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.space, self.external_id)
    }
}

/// Identity of one version of a data model.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelKey {
    pub external_id: String,
    pub space: String,
    pub version: String,
}
impl ModelKey {
    pub fn new(
        space: impl Into<String>,
        external_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            space: space.into(),
            version: version.into(),
        }
    }

    /// True when both keys name versions of the same data model.
    pub fn same_model(&self, other: &ModelKey) -> bool {
        self.space == other.space && self.external_id == other.external_id
    }
}
impl std::fmt::Display for ModelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}/{}", self.space, self.external_id, self.version)
    }
}
