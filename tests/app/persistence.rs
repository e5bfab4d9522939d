use crate::common;
use cinepulse::{CineError, CinePulse, FileStore, Genre, HistoryStore, MemoryStore, Status};

#[tokio::test]
async fn failed_save_reports_error_and_keeps_previous_blob() {
    let app = CinePulse::open(&common::unreachable_client(), MemoryStore::new()).unwrap();
    app.generate_profile(Genre::Mystery).await.unwrap();
    let before = app.store().blob();

    app.store().fail_writes(true);
    let err = app.generate_profile(Genre::Mystery).await.unwrap_err();
    assert!(matches!(err, CineError::Io(_)), "got {err:?}");
    assert_eq!(Status::Failed.to_string(), "Error generating profile.");

    // The append happened in memory; the store still holds one entry.
    assert_eq!(app.history().await.len(), 2);
    assert_eq!(app.store().blob(), before);
    assert_eq!(app.store().load().unwrap().len(), 1);

    // The next successful mutation writes the full list again.
    app.store().fail_writes(false);
    app.generate_profile(Genre::Mystery).await.unwrap();
    assert_eq!(app.store().load().unwrap(), app.history().await);
    assert_eq!(app.history().await.len(), 3);
}

#[tokio::test]
async fn file_store_history_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let client = common::unreachable_client();

    let first = CinePulse::open(&client, FileStore::new(dir.path())).unwrap();
    first.generate_profile(Genre::Adventure).await.unwrap();
    first.generate_profile(Genre::Animation).await.unwrap();
    let written = first.history().await;
    drop(first);

    let second = CinePulse::open(&client, FileStore::new(dir.path())).unwrap();
    assert_eq!(second.history().await, written);

    second.clear_history().await.unwrap();
    let third = CinePulse::open(&client, FileStore::new(dir.path())).unwrap();
    assert!(third.history().await.is_empty());
}
