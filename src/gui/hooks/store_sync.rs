use crate::store::{RecordView, UploadStore};
use dioxus::prelude::*;

/// Mirrors the store's records into `records`, re-reading them on every
/// store revision so background reads show up as they finish.
pub fn use_store_records(store: UploadStore, mut records: Signal<Vec<RecordView>>) {
    use_future(move || {
        let store = store.clone();
        async move {
            let mut changes = store.subscribe();
            loop {
                records.set(store.records());
                if changes.changed().await.is_err() {
                    log::debug!("Store change feed closed");
                    break;
                }
            }
        }
    });
}
