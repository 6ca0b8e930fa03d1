use crate::error::ClassifiedError;
use crate::model::DataModelVersion;
use crate::model::ModelKey;
use crate::model::ViewKey;
use crate::reference::DeletionPlan;
use crate::reference::Pager;
use crate::reference::ReferencedView;
use crate::reference::drain_pages;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// Decides which of a data model's views can be deleted along with it by
/// counting references from every other data model.
pub struct ReferenceResolver;
impl ReferenceResolver {
    /// Drain the full listing of data models, then compute the plan.
    ///
    /// No decision is made until every page has been fetched, since a
    /// reference may appear on any page.
    pub async fn plan_deletion(
        candidate: &DataModelVersion,
        data_models: &dyn Pager<DataModelVersion>,
    ) -> Result<DeletionPlan, ClassifiedError> {
        let all_models = drain_pages(data_models).await?;
        Ok(Self::compute_plan(candidate, &all_models))
    }

    /// Versions sharing the candidate's space and externalId belong to the
    /// candidate and never count as referencing models.
    pub fn compute_plan(
        candidate: &DataModelVersion,
        all_models: &[DataModelVersion],
    ) -> DeletionPlan {
        let candidate_key = candidate.key();

        let mut deletable_views = candidate.views.iter()
            .cloned()
            .collect::<IndexSet<ViewKey>>();
        let mut references = IndexMap::<ViewKey, Vec<ModelKey>>::new();
        let mut model_versions = vec![candidate_key.clone()];

        for model in all_models {
            let model_key = model.key();
            if model_key.same_model(&candidate_key) {
                if !model_versions.contains(&model_key) {
                    model_versions.push(model_key);
                }
                continue;
            }

            for view in &model.views {
                if deletable_views.shift_remove(view) {
                    references.entry(view.clone()).or_default().push(model_key.clone());
                } else if let Some(referenced_by) = references.get_mut(view)
                    && !referenced_by.contains(&model_key) {
                    referenced_by.push(model_key.clone());
                }
            }
        }

        log::debug!(
            "Deleting `{candidate_key}` removes {} view(s); {} view(s) are still referenced.",
            deletable_views.len(),
            references.len(),
        );

        DeletionPlan {
            deletable_views,
            model_versions,
            referenced_views: references.into_iter()
                .map(|(view, referenced_by)| ReferencedView { referenced_by, view })
                .collect(),
        }
    }
}
