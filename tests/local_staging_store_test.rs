use bytes::Bytes;

use chatvault::application::ports::{StagingStore, StagingStoreError};
use chatvault::domain::StoragePath;
use chatvault::infrastructure::storage::LocalStagingStore;

#[tokio::test]
async fn given_stored_object_when_fetching_then_bytes_match() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::for_upload("message_1.json");

    let size = store
        .store(&path, Bytes::from_static(b"{\"messages\":[]}"))
        .await
        .unwrap();

    assert_eq!(size, 15);
    assert_eq!(store.fetch(&path).await.unwrap(), b"{\"messages\":[]}");
}

#[tokio::test]
async fn given_deleted_object_when_fetching_then_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::for_upload("message_1.json");

    store.store(&path, Bytes::from_static(b"data")).await.unwrap();
    store.delete(&path).await.unwrap();

    let error = store.fetch(&path).await.unwrap_err();
    assert!(matches!(error, StagingStoreError::NotFound(_)));
}

#[tokio::test]
async fn given_hostile_filename_when_staging_then_path_stays_one_segment() {
    let path = StoragePath::for_upload("weird name/../passwd");

    assert!(path.as_str().starts_with("uploads/"));
    // Everything after the prefix is a single flattened segment.
    assert!(!path.as_str()["uploads/".len()..].contains('/'));
}

#[tokio::test]
async fn given_same_filename_twice_when_staging_then_paths_differ() {
    let first = StoragePath::for_upload("message_1.json");
    let second = StoragePath::for_upload("message_1.json");

    assert_ne!(first, second);
}
