use crate::model::ContainerKey;
use crate::model::ViewKey;
use crate::reference::CleanupOptions;
use crate::reference::DataModelDeleter;
use crate::reference::ReferenceResolver;
use crate::reference::ResourceKind;
use crate::reference::run_cleanup;
use crate::reference::tests::fakes::FakeBackend;
use crate::reference::tests::fakes::FakePager;
use crate::reference::tests::fakes::model;
use crate::reference::tests::fakes::view;

fn many_views(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("V{idx}")).collect()
}

#[test]
fn batch_size_is_clamped() {
    assert_eq!(CleanupOptions::default().batch_size(), 100);
    assert_eq!(CleanupOptions { batch_size: 500 }.batch_size(), 100);
    assert_eq!(CleanupOptions { batch_size: 0 }.batch_size(), 1);
}

#[tokio::test]
async fn deletes_in_bounded_batches() {
    let names = many_views(250);
    let refs = names.iter().map(String::as_str).collect::<Vec<_>>();
    let plan = ReferenceResolver::compute_plan(&model("Owner", "1", &refs), &[]);
    let backend = FakeBackend::default();

    let report = run_cleanup(&backend, &plan, &CleanupOptions::default()).await;

    assert!(report.is_complete());
    let view_batch_sizes = backend.deleted_views.lock().unwrap()
        .iter()
        .map(Vec::len)
        .collect::<Vec<_>>();
    assert_eq!(view_batch_sizes, vec![100, 100, 50]);
    assert_eq!(backend.deleted_containers.lock().unwrap().len(), 3);
    assert_eq!(backend.deleted_models.lock().unwrap().len(), 1);
    assert_eq!(report.outcomes().len(), 7);
}

#[tokio::test]
async fn failed_batch_does_not_undo_others() {
    let plan = ReferenceResolver::compute_plan(
        &model("Owner", "1", &["A", "B", "C", "D", "E"]),
        &[],
    );
    let backend = FakeBackend {
        poisoned_view: Some(view("D")),
        ..FakeBackend::default()
    };

    let report = run_cleanup(&backend, &plan, &CleanupOptions { batch_size: 2 }).await;

    assert!(!report.is_complete());
    let failures = report.failures().collect::<Vec<_>>();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind, ResourceKind::View);
    assert_eq!(failures[0].batch_index, 1);
    assert_eq!(failures[0].items, vec!["blog:C/1", "blog:D/1"]);

    let deleted = backend.deleted_views.lock().unwrap()
        .iter()
        .flatten()
        .cloned()
        .collect::<Vec<ViewKey>>();
    assert_eq!(deleted.len(), 3);
    assert!(deleted.contains(&view("E")));
    assert_eq!(backend.deleted_containers.lock().unwrap().concat().len(), 5);
}

#[tokio::test]
async fn empty_plan_only_deletes_model_versions() {
    let plan = ReferenceResolver::compute_plan(
        &model("Owner", "1", &["X"]),
        &[model("A", "1", &["X"])],
    );
    let backend = FakeBackend::default();

    let report = run_cleanup(&backend, &plan, &CleanupOptions::default()).await;

    assert_eq!(report.outcomes().len(), 1);
    assert_eq!(report.outcomes()[0].kind, ResourceKind::DataModelVersion);
    assert!(backend.deleted_views.lock().unwrap().is_empty());
}

#[tokio::test]
async fn deleter_plans_then_cleans_up() {
    let candidate = model("Owner", "1", &["X", "Y", "Z"]);
    let pager = FakePager::new(vec![
        vec![model("A", "1", &["X", "Y"])],
        vec![model("B", "1", &["X"]), model("Owner", "1", &["X", "Y", "Z"])],
    ]);
    let backend = FakeBackend::default();

    let outcome = DataModelDeleter::new(&pager, &backend)
        .with_options(CleanupOptions { batch_size: 10 })
        .delete(&candidate)
        .await
        .unwrap();

    assert_eq!(outcome.plan.referenced_views().len(), 2);
    assert!(outcome.report.is_complete());
    assert_eq!(*backend.deleted_views.lock().unwrap(), vec![vec![view("Z")]]);
}

#[tokio::test]
async fn cleanup_keeps_container_of_referenced_view() {
    let mut candidate = model("Owner", "1", &[]);
    candidate.views = vec![
        ViewKey::new("blog", "Person", "1"),
        ViewKey::new("blog", "Person", "2"),
    ];
    let mut other = model("A", "1", &[]);
    other.views = vec![ViewKey::new("blog", "Person", "1")];
    let plan = ReferenceResolver::compute_plan(&candidate, &[other]);
    let backend = FakeBackend::default();

    let report = run_cleanup(&backend, &plan, &CleanupOptions::default()).await;

    assert!(report.is_complete());
    assert_eq!(
        *backend.deleted_views.lock().unwrap(),
        vec![vec![ViewKey::new("blog", "Person", "2")]],
    );
    let deleted_containers = backend.deleted_containers.lock().unwrap().concat();
    assert!(!deleted_containers.contains(&ContainerKey::new("blog", "Person")));
}
