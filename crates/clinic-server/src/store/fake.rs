// SPDX-License-Identifier: Apache-2.0

use crate::store::{empty_store_bytes, StoreBackend, StoreError};
use async_trait::async_trait;
use clinic_model::RecordKind;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

/// In-memory backend for tests. Failure flags force the read/write error
/// paths so the 500 contracts can be exercised without touching a disk.
pub struct FakeStore {
    pub documents: Mutex<HashMap<RecordKind, Vec<u8>>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub write_calls: AtomicU64,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            write_calls: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl StoreBackend for FakeStore {
    fn backend_tag(&self) -> &'static str {
        "fake"
    }

    async fn load(&self, kind: RecordKind) -> Result<Vec<u8>, StoreError> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(StoreError::Io("injected read failure".to_string()));
        }
        let mut documents = self.documents.lock().await;
        Ok(documents
            .entry(kind)
            .or_insert_with(empty_store_bytes)
            .clone())
    }

    async fn persist(&self, kind: RecordKind, bytes: Vec<u8>) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StoreError::Io("injected write failure".to_string()));
        }
        self.write_calls.fetch_add(1, Ordering::Relaxed);
        self.documents.lock().await.insert(kind, bytes);
        Ok(())
    }
}
