// Tests for the upload store
// Focus: ordering, partial failure, clear semantics, read accounting

use super::*;
use crate::reader::testing::{ManualBlob, Outcome};
use crate::reader::{MemoryBlob, SharedBlob};
use std::sync::Arc;
use std::time::Duration;

async fn settle(store: &UploadStore) {
    tokio::time::timeout(Duration::from_secs(2), store.wait_settled())
        .await
        .expect("store should settle");
}

// ============================================================
// BATCH BEHAVIOUR
// ============================================================

#[tokio::test]
async fn test_append_encodes_three_byte_file() {
    let store = UploadStore::new(ReadMode::Bytes);
    let blob: SharedBlob = Arc::new(MemoryBlob::new("man.bin", vec![0x4D, 0x61, 0x6E]));
    store.append(blob, "man.bin", 3);
    settle(&store).await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].filename, "man.bin");
    assert_eq!(snapshot[0].encoded_content, "TWFu");
    assert_eq!(snapshot[0].decode().unwrap(), vec![0x4D, 0x61, 0x6E]);
}

#[tokio::test]
async fn test_empty_store_snapshot() {
    let store = UploadStore::new(ReadMode::Bytes);
    assert!(store.is_empty());
    assert!(store.snapshot().is_empty());
    settle(&store).await;
}

#[tokio::test]
async fn test_order_preserved_under_reversed_completion() {
    let store = UploadStore::new(ReadMode::Bytes);
    let f1 = ManualBlob::loading("f1", b"one");
    let f2 = ManualBlob::loading("f2", b"two");
    let f3 = ManualBlob::loading("f3", b"three");
    for blob in [&f1, &f2, &f3] {
        store.append_blob(blob.clone());
    }
    for blob in [&f1, &f2, &f3] {
        blob.wait_for_reads(1).await;
    }

    f3.release();
    f2.release();
    f1.release();
    settle(&store).await;

    let names: Vec<_> = store.snapshot().into_iter().map(|a| a.filename).collect();
    assert_eq!(names, ["f1", "f2", "f3"]);
    let contents: Vec<_> = store
        .snapshot()
        .into_iter()
        .map(|a| a.decode().unwrap())
        .collect();
    assert_eq!(contents, [b"one".to_vec(), b"two".to_vec(), b"three".to_vec()]);
}

#[tokio::test]
async fn test_partial_failure_isolation() {
    let store = UploadStore::new(ReadMode::Bytes);
    let f1: SharedBlob = Arc::new(MemoryBlob::new("f1", b"first".to_vec()));
    let f2 = ManualBlob::new("f2", Outcome::Fail("unreadable".into()));
    let f3: SharedBlob = Arc::new(MemoryBlob::new("f3", b"third".to_vec()));

    store.append_blob(f1);
    store.append_blob(f2.clone());
    store.append_blob(f3);
    f2.wait_for_reads(1).await;
    f2.release();
    settle(&store).await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[0].decode().unwrap(), b"first");
    assert_eq!(snapshot[1].filename, "f2");
    assert_eq!(snapshot[1].encoded_content, "");
    assert_eq!(snapshot[2].decode().unwrap(), b"third");

    let states: Vec<_> = store.records().into_iter().map(|r| r.state).collect();
    assert_eq!(
        states,
        [UploadState::Ready, UploadState::Failed, UploadState::Ready]
    );
}

#[tokio::test]
async fn test_clear_discards_late_result() {
    let store = UploadStore::new(ReadMode::Bytes);
    let f1 = ManualBlob::loading("f1", b"late");
    store.append_blob(f1.clone());
    f1.wait_for_reads(1).await;

    store.clear();
    assert!(store.snapshot().is_empty());

    f1.release();
    // let the read task observe the result
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert!(store.snapshot().is_empty());
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_zero_appends_start_no_reads() {
    let store = UploadStore::new(ReadMode::Bytes);
    let untouched = ManualBlob::loading("untouched", b"data");
    assert!(store.snapshot().is_empty());
    tokio::task::yield_now().await;
    assert_eq!(untouched.reads_started(), 0);
}

// ============================================================
// LIFECYCLE
// ============================================================

#[tokio::test]
async fn test_each_append_starts_exactly_one_read() {
    let store = UploadStore::new(ReadMode::Bytes);
    let blob = ManualBlob::loading("same", b"x");
    store.append_blob(blob.clone());
    store.append_blob(blob.clone());
    blob.wait_for_reads(2).await;
    tokio::task::yield_now().await;
    assert_eq!(blob.reads_started(), 2);
    blob.release();
    settle(&store).await;
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_duplicate_filenames_are_distinct_records() {
    let store = UploadStore::new(ReadMode::Bytes);
    let a: SharedBlob = Arc::new(MemoryBlob::new("dup.txt", b"a".to_vec()));
    let b: SharedBlob = Arc::new(MemoryBlob::new("dup.txt", b"b".to_vec()));
    let id_a = store.append_blob(a);
    let id_b = store.append_blob(b);
    assert_ne!(id_a, id_b);
    settle(&store).await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].decode().unwrap(), b"a");
    assert_eq!(snapshot[1].decode().unwrap(), b"b");
}

#[tokio::test]
async fn test_record_moves_through_reading_to_ready() {
    let store = UploadStore::new(ReadMode::Bytes);
    let blob = ManualBlob::loading("slow", b"slow");
    let id = store.append_blob(blob.clone());

    let added = store.get(id).unwrap();
    assert_eq!(added.state, UploadState::Added);
    assert!(!added.has_content);

    blob.wait_for_reads(1).await;
    assert_eq!(store.get(id).unwrap().state, UploadState::Reading);

    blob.release();
    settle(&store).await;
    let ready = store.get(id).unwrap();
    assert_eq!(ready.state, UploadState::Ready);
    assert!(ready.has_content);
    assert_eq!(ready.size_bytes, 4);
}

#[tokio::test]
async fn test_hung_read_does_not_block_others() {
    let store = UploadStore::new(ReadMode::Bytes);
    let hung = ManualBlob::loading("hung", b"never");
    let hung_id = store.append_blob(hung.clone());
    let ok: SharedBlob = Arc::new(MemoryBlob::new("ok", b"fine".to_vec()));
    let ok_id = store.append_blob(ok);
    hung.wait_for_reads(1).await;

    // wait until the healthy record is done
    tokio::time::timeout(Duration::from_secs(2), async {
        while store.get(ok_id).unwrap().state != UploadState::Ready {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("healthy read should finish");

    assert_eq!(store.get(hung_id).unwrap().state, UploadState::Reading);
    let pending = tokio::time::timeout(Duration::from_millis(50), store.wait_settled()).await;
    assert!(pending.is_err(), "store cannot settle while a read hangs");

    let snapshot = store.snapshot();
    assert_eq!(snapshot[0].encoded_content, "");
    assert_eq!(snapshot[1].decode().unwrap(), b"fine");
}

#[tokio::test]
async fn test_aborted_read_marks_failed() {
    let store = UploadStore::new(ReadMode::Bytes);
    let blob = ManualBlob::new("aborted", Outcome::Abort);
    let id = store.append_blob(blob.clone());
    blob.wait_for_reads(1).await;
    blob.release();
    settle(&store).await;
    assert_eq!(store.get(id).unwrap().state, UploadState::Failed);
}

#[tokio::test]
async fn test_commit_snapshots_and_clears() {
    let store = UploadStore::new(ReadMode::Bytes);
    store.append_blob(Arc::new(MemoryBlob::new("a", b"Man".to_vec())));
    settle(&store).await;

    let artifacts = store.commit();
    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].encoded_content, "TWFu");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_append_after_clear_keeps_working() {
    let store = UploadStore::new(ReadMode::Bytes);
    let first = store.append_blob(Arc::new(MemoryBlob::new("a", b"a".to_vec())));
    store.clear();
    let second = store.append_blob(Arc::new(MemoryBlob::new("b", b"b".to_vec())));
    assert!(second > first, "ids are never reused");
    settle(&store).await;
    let names: Vec<_> = store.snapshot().into_iter().map(|a| a.filename).collect();
    assert_eq!(names, ["b"]);
}

#[tokio::test]
async fn test_data_url_mode_keeps_payload_only() {
    let store = UploadStore::new(ReadMode::DataUrl);
    let blob: SharedBlob =
        Arc::new(MemoryBlob::new("man.txt", b"Man".to_vec()).with_mime_type("text/plain"));
    store.append_blob(blob);
    settle(&store).await;
    assert_eq!(store.snapshot()[0].encoded_content, "TWFu");
}

#[tokio::test]
async fn test_subscribe_sees_changes() {
    let store = UploadStore::new(ReadMode::Bytes);
    let mut changes = store.subscribe();
    store.append_blob(Arc::new(MemoryBlob::new("a", b"a".to_vec())));
    tokio::time::timeout(Duration::from_secs(1), changes.changed())
        .await
        .expect("append should notify")
        .unwrap();
    assert!(*changes.borrow_and_update() > 0);
}

#[tokio::test]
async fn test_store_equality_is_identity() {
    let store = UploadStore::default();
    let same = store.clone();
    let other = UploadStore::default();
    assert_eq!(store, same);
    assert_ne!(store, other);
    assert_eq!(store.mode(), ReadMode::Bytes);
}
