// SPDX-License-Identifier: Apache-2.0

use crate::store::{empty_store_bytes, StoreBackend, StoreError};
use async_trait::async_trait;
use clinic_model::RecordKind;
use std::fs;
use std::path::{Path, PathBuf};

/// Flat-file backend: one pretty-printed JSON array per record kind, under
/// a data directory created recursively on construction.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&root)
            .map_err(|e| StoreError::Io(format!("create data dir {}: {e}", root.display())))?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn store_path(&self, kind: RecordKind) -> PathBuf {
        self.root.join(kind.file_name())
    }
}

#[async_trait]
impl StoreBackend for JsonFileStore {
    fn backend_tag(&self) -> &'static str {
        "json-file"
    }

    async fn load(&self, kind: RecordKind) -> Result<Vec<u8>, StoreError> {
        let path = self.store_path(kind);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // First access: initialize the store to an empty array so
                // later readers see a well-formed document.
                let bytes = empty_store_bytes();
                tokio::fs::write(&path, &bytes)
                    .await
                    .map_err(|e| StoreError::Io(format!("init {}: {e}", path.display())))?;
                Ok(bytes)
            }
            Err(e) => Err(StoreError::Io(format!("read {}: {e}", path.display()))),
        }
    }

    async fn persist(&self, kind: RecordKind, bytes: Vec<u8>) -> Result<(), StoreError> {
        let path = self.store_path(kind);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| StoreError::Io(format!("write {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{decode_records, encode_records};
    use clinic_model::{Appointment, APPOINTMENT_STATUS_PENDING};
    use tempfile::tempdir;

    fn sample(id: i64) -> Appointment {
        Appointment {
            id,
            timestamp: chrono::Utc::now(),
            name: "Jo".to_string(),
            email: "jo@x.co".to_string(),
            phone: "123-4567".to_string(),
            doctor: "Dr. X".to_string(),
            date: "2025-01-01".to_string(),
            time: "10:00".to_string(),
            status: APPOINTMENT_STATUS_PENDING.to_string(),
        }
    }

    #[tokio::test]
    async fn absent_file_is_initialized_to_an_empty_array() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("data")).expect("store");
        assert_eq!(store.backend_tag(), "json-file");
        let bytes = store.load(RecordKind::Appointments).await.expect("load");
        assert_eq!(bytes, b"[]");
        // The file now exists on disk with the same canonical content.
        let on_disk =
            std::fs::read(dir.path().join("data").join("appointments.json")).expect("read file");
        assert_eq!(on_disk, b"[]");
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().to_path_buf()).expect("store");
        let records = vec![sample(1), sample(2)];
        store
            .persist(
                RecordKind::Appointments,
                encode_records(&records).expect("encode"),
            )
            .await
            .expect("persist");
        let bytes = store.load(RecordKind::Appointments).await.expect("load");
        let back: Vec<Appointment> = decode_records(&bytes).expect("decode");
        assert_eq!(back, records);
    }

    #[tokio::test]
    async fn repeated_reads_without_writes_are_identical() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().to_path_buf()).expect("store");
        store
            .persist(
                RecordKind::Contacts,
                encode_records(&[sample(7)]).expect("encode"),
            )
            .await
            .expect("persist");
        let first = store.load(RecordKind::Contacts).await.expect("first");
        let second = store.load(RecordKind::Contacts).await.expect("second");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn malformed_file_reports_corrupt_on_decode() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().to_path_buf()).expect("store");
        std::fs::write(dir.path().join("contacts.json"), b"{\"oops\":1}").expect("seed");
        let bytes = store.load(RecordKind::Contacts).await.expect("load");
        let err = decode_records::<Appointment>(&bytes).expect_err("corrupt");
        assert!(matches!(err, crate::store::StoreError::Corrupt(_)));
    }
}
