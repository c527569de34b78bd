use path_lemmatizer::application::ports::{DocumentStore, PendingUpdate, RepositoryError};
use path_lemmatizer::domain::LemmaSet;
use path_lemmatizer::infrastructure::persistence::InMemoryDocumentStore;

fn update(id: path_lemmatizer::domain::DocumentId, lemmas: &[&str]) -> PendingUpdate {
    PendingUpdate {
        id,
        lemmas: lemmas.iter().copied().collect::<LemmaSet>(),
    }
}

#[tokio::test]
async fn given_pages_when_fetching_after_last_id_then_every_record_is_seen_once() {
    let store = InMemoryDocumentStore::with_paths((0..7).map(|i| format!("Звіт_{i}.doc")));

    let mut seen = Vec::new();
    let mut after = None;
    loop {
        let page = store.fetch_unprocessed(after, 3).await.unwrap();
        if page.is_empty() {
            break;
        }
        after = page.last().map(|record| record.id);
        seen.extend(page.into_iter().map(|record| record.id));
    }

    let mut sorted = seen.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(seen.len(), 7);
    assert_eq!(seen, sorted);
}

#[tokio::test]
async fn given_processed_and_pathless_records_when_fetching_then_only_eligible_are_returned() {
    let store = InMemoryDocumentStore::new();
    store.insert_without_path();
    store.insert_processed("Акт.pdf", vec!["акт".to_string()]);
    let eligible = store.insert_path("План.xls");

    let page = store.fetch_unprocessed(None, 10).await.unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, eligible);
    assert_eq!(page[0].path, "План.xls");
}

#[tokio::test]
async fn given_bulk_update_when_applied_then_lemmas_are_stored_and_counted() {
    let store = InMemoryDocumentStore::new();
    let first = store.insert_path("Наказ.pdf");
    let second = store.insert_path("План.xls");

    let report = store
        .bulk_update(&[update(first, &["наказ", "pdf"]), update(second, &["план"])])
        .await
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.modified, 2);
    assert_eq!(
        store.normalized_text(first),
        Some(vec!["pdf".to_string(), "наказ".to_string()])
    );
    assert_eq!(store.unprocessed_count(), 0);
    assert_eq!(store.bulk_write_sizes(), vec![2]);
}

#[tokio::test]
async fn given_already_processed_record_when_updating_then_existing_value_is_kept() {
    let store = InMemoryDocumentStore::new();
    let id = store.insert_processed("Акт.pdf", vec!["акт".to_string()]);

    let report = store.bulk_update(&[update(id, &["інше"])]).await.unwrap();

    assert_eq!(report.modified, 0);
    assert_eq!(store.normalized_text(id), Some(vec!["акт".to_string()]));
}

#[tokio::test]
async fn given_rejected_record_when_updating_then_failure_is_reported_and_others_apply() {
    let store = InMemoryDocumentStore::new();
    let bad = store.insert_path("Наказ.pdf");
    let good = store.insert_path("План.xls");
    store.reject_updates_for(bad);

    let report = store
        .bulk_update(&[update(bad, &["наказ"]), update(good, &["план"])])
        .await
        .unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].id, bad);
    assert_eq!(report.modified, 1);
    assert_eq!(store.normalized_text(bad), None);
}

#[tokio::test]
async fn given_fetch_failure_injected_when_fetching_then_later_reads_fail() {
    let store = InMemoryDocumentStore::with_paths(["Наказ.pdf"]).fail_fetch_after(1);

    assert!(store.fetch_unprocessed(None, 10).await.is_ok());
    assert!(matches!(
        store.fetch_unprocessed(None, 10).await,
        Err(RepositoryError::ConnectionFailed(_))
    ));
}
