//! Controllable blobs for exercising readers and the upload store

use super::types::{Blob, ReadSink};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// How a [`ManualBlob`] answers once released.
#[derive(Debug, Clone)]
pub enum Outcome {
    Load(Vec<u8>),
    Abort,
    Fail(String),
}

/// Blob whose reads stay pending until the test calls [`ManualBlob::release`].
/// Counts every `start_read` so tests can assert how many reads happened.
#[derive(Debug)]
pub struct ManualBlob {
    name: String,
    size: u64,
    outcome: Outcome,
    pending: Mutex<Vec<ReadSink>>,
    reads_started: AtomicUsize,
}

impl ManualBlob {
    pub fn new(name: &str, outcome: Outcome) -> Arc<Self> {
        let size = match &outcome {
            Outcome::Load(bytes) => bytes.len() as u64,
            _ => 0,
        };
        Arc::new(Self {
            name: name.to_string(),
            size,
            outcome,
            pending: Mutex::new(Vec::new()),
            reads_started: AtomicUsize::new(0),
        })
    }

    pub fn loading(name: &str, bytes: &[u8]) -> Arc<Self> {
        Self::new(name, Outcome::Load(bytes.to_vec()))
    }

    pub fn reads_started(&self) -> usize {
        self.reads_started.load(Ordering::SeqCst)
    }

    /// Resolve every pending read with the configured outcome.
    pub fn release(&self) {
        let sinks: Vec<ReadSink> = self.pending.lock().unwrap().drain(..).collect();
        for sink in sinks {
            match &self.outcome {
                Outcome::Load(bytes) => sink.load(bytes.clone()),
                Outcome::Abort => sink.abort(),
                Outcome::Fail(reason) => sink.fail(reason.clone()),
            }
        }
    }

    /// Drop every pending sink without answering.
    pub fn forget(&self) {
        self.pending.lock().unwrap().clear();
    }

    /// Wait until `count` reads have been started.
    pub async fn wait_for_reads(&self, count: usize) {
        while self.reads_started() < count {
            tokio::task::yield_now().await;
        }
    }
}

impl Blob for ManualBlob {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn start_read(self: Arc<Self>, sink: ReadSink) {
        self.pending.lock().unwrap().push(sink);
        self.reads_started.fetch_add(1, Ordering::SeqCst);
    }
}
