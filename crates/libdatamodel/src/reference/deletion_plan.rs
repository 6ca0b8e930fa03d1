use crate::model::ContainerKey;
use crate::model::ModelKey;
use crate::model::ViewKey;
use indexmap::IndexSet;

/// A view kept alive because other data models still reference it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencedView {
    /// Every distinct model referencing the view, in listing order.
    pub referenced_by: Vec<ModelKey>,
    pub view: ViewKey,
}

/// What deleting a data model may safely remove, and what it must keep.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionPlan {
    pub(crate) deletable_views: IndexSet<ViewKey>,
    pub(crate) model_versions: Vec<ModelKey>,
    pub(crate) referenced_views: Vec<ReferencedView>,
}
impl DeletionPlan {
    pub fn deletable_views(&self) -> impl Iterator<Item = &ViewKey> {
        self.deletable_views.iter()
    }

    /// Containers backing the deletable views, without duplicates.
    ///
    /// A container that also backs a still-referenced view (another version
    /// of the same view) is kept.
    pub fn container_keys(&self) -> Vec<ContainerKey> {
        let retained = self.referenced_views.iter()
            .map(|referenced| referenced.view.container_key())
            .collect::<IndexSet<_>>();
        self.deletable_views.iter()
            .map(ViewKey::container_key)
            .filter(|container| !retained.contains(container))
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// The versions of the deleted model itself.
    pub fn model_versions(&self) -> &[ModelKey] {
        self.model_versions.as_slice()
    }

    pub fn referenced_views(&self) -> &[ReferencedView] {
        self.referenced_views.as_slice()
    }
}
