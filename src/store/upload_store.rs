// Upload collection store
use super::types::{PendingUpload, ReadMode, RecordId, RecordView, UploadState};
use crate::codec::{encode, parse_data_url};
use crate::download::{DownloadableArtifact, build_downloadable_artifact};
use crate::reader::{ReadError, ReadResult, SharedBlob, read_as_bytes, read_as_data_url};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

struct StoreState {
    records: Vec<PendingUpload>,
    next_id: u64,
}

struct Shared {
    state: Mutex<StoreState>,
    revision: watch::Sender<u64>,
    mode: ReadMode,
}

/// Ordered list of pending uploads.
///
/// Cloning is cheap and yields another handle to the same list. Appends
/// spawn their read on the current tokio runtime, so the store must be used
/// from inside one.
#[derive(Clone)]
pub struct UploadStore {
    shared: Arc<Shared>,
}

impl UploadStore {
    pub fn new(mode: ReadMode) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(StoreState {
                    records: Vec::new(),
                    next_id: 1,
                }),
                revision,
                mode,
            }),
        }
    }

    pub fn mode(&self) -> ReadMode {
        self.shared.mode
    }

    /// Insert a record at the end of the list and start reading it in the
    /// background. Read failures are logged and leave the record `Failed`;
    /// they are never reported to the caller.
    pub fn append(&self, handle: SharedBlob, filename: impl Into<String>, size_bytes: u64) -> RecordId {
        let filename = filename.into();
        let id = {
            let mut state = self.lock();
            let id = RecordId(state.next_id);
            state.next_id += 1;
            state.records.push(PendingUpload {
                id,
                source: handle.clone(),
                filename: filename.clone(),
                size_bytes,
                state: UploadState::Added,
                encoded_content: None,
            });
            id
        };
        log::debug!("➕ Added '{}' ({} bytes) as {}", filename, size_bytes, id);
        self.bump();

        let store = self.clone();
        tokio::spawn(async move {
            store.drive_read(id, filename, handle).await;
        });
        id
    }

    /// Append using the name and size the blob reports for itself.
    pub fn append_blob(&self, handle: SharedBlob) -> RecordId {
        let filename = handle.name().to_string();
        let size_bytes = handle.size();
        self.append(handle, filename, size_bytes)
    }

    /// Drop every record. Reads still in flight run to completion, but
    /// their results no longer match any record and are discarded.
    pub fn clear(&self) {
        let dropped = std::mem::take(&mut self.lock().records).len();
        log::debug!("🧹 Cleared {} pending uploads", dropped);
        self.bump();
    }

    /// Current records as artifacts, in insertion order. Records without
    /// content yet (or that failed) carry an empty string.
    pub fn snapshot(&self) -> Vec<DownloadableArtifact> {
        self.lock()
            .records
            .iter()
            .map(|r| {
                build_downloadable_artifact(
                    r.filename.clone(),
                    r.encoded_content.clone().unwrap_or_default(),
                )
            })
            .collect()
    }

    /// Snapshot and clear in one step, as the Upload action does.
    pub fn commit(&self) -> Vec<DownloadableArtifact> {
        let records = std::mem::take(&mut self.lock().records);
        let artifacts: Vec<DownloadableArtifact> = records
            .into_iter()
            .map(|r| build_downloadable_artifact(r.filename, r.encoded_content.unwrap_or_default()))
            .collect();
        log::info!("📦 Committed {} uploads", artifacts.len());
        self.bump();
        artifacts
    }

    pub fn records(&self) -> Vec<RecordView> {
        self.lock().records.iter().map(RecordView::from).collect()
    }

    pub fn get(&self, id: RecordId) -> Option<RecordView> {
        self.lock()
            .records
            .iter()
            .find(|r| r.id == id)
            .map(RecordView::from)
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    /// Revision counter bumped on every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    /// Resolves once no current record is waiting on its read.
    /// A read that never completes keeps this pending.
    pub async fn wait_settled(&self) {
        let mut changes = self.subscribe();
        loop {
            if !self.has_pending() {
                return;
            }
            if changes.changed().await.is_err() {
                return;
            }
        }
    }

    fn has_pending(&self) -> bool {
        self.lock().records.iter().any(|r| r.state.is_pending())
    }

    async fn drive_read(self, id: RecordId, filename: String, handle: SharedBlob) {
        self.update(id, |r| r.state = UploadState::Reading);

        let result = match self.shared.mode {
            ReadMode::Bytes => read_as_bytes(&handle).await.map(|bytes| encode(&bytes)),
            ReadMode::DataUrl => read_as_data_url(&handle).await.and_then(|url| payload_of(&url)),
        };

        match result {
            Ok(content) => {
                let encoded_len = content.len();
                let applied = self.update(id, move |r| {
                    r.state = UploadState::Ready;
                    r.encoded_content = Some(content);
                });
                if applied {
                    log::debug!("✅ Encoded '{}' {} ({} chars)", filename, id, encoded_len);
                } else {
                    log::debug!("Discarding read of '{}' {}: record was cleared", filename, id);
                }
            }
            Err(err) => {
                log::warn!("❌ Reading '{}' {} failed: {}", filename, id, err);
                self.update(id, |r| {
                    r.state = UploadState::Failed;
                    r.encoded_content = None;
                });
            }
        }
    }

    /// Apply `f` to the record with `id`, if it is still in the list.
    fn update(&self, id: RecordId, f: impl FnOnce(&mut PendingUpload)) -> bool {
        let applied = match self.lock().records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        };
        if applied {
            self.bump();
        }
        applied
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.shared.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        self.shared.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }
}

fn payload_of(data_url: &str) -> ReadResult<String> {
    parse_data_url(data_url)
        .map(|url| url.payload.to_string())
        .map_err(|e| ReadError::Failed {
            reason: e.to_string(),
        })
}

impl Default for UploadStore {
    fn default() -> Self {
        Self::new(ReadMode::default())
    }
}

impl PartialEq for UploadStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl fmt::Debug for UploadStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("UploadStore")
            .field("mode", &self.shared.mode)
            .field("records", &state.records)
            .finish()
    }
}
