// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clinic_model::RecordKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub mod fake;
pub mod json_file;

pub use fake::FakeStore;
pub use json_file::JsonFileStore;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// The backing file could not be read or written.
    Io(String),
    /// The backing file exists but does not parse as a JSON array of
    /// records. The service layer decides whether to surface or absorb this.
    Corrupt(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "store io failure: {msg}"),
            Self::Corrupt(msg) => write!(f, "store corrupt: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Byte-level store backend: one JSON-array document per record kind.
/// Parsing happens above the backend so the file and in-memory backends
/// share one wire format.
#[async_trait]
pub trait StoreBackend: Send + Sync + 'static {
    fn backend_tag(&self) -> &'static str {
        "unknown"
    }

    /// Full contents of the store document. A store that has never been
    /// written is initialized to an empty array, never an error.
    async fn load(&self, kind: RecordKind) -> Result<Vec<u8>, StoreError>;

    /// Overwrite the store document with `bytes`. No atomic rename; a crash
    /// mid-write can corrupt the store (accepted limitation, see DESIGN.md).
    async fn persist(&self, kind: RecordKind, bytes: Vec<u8>) -> Result<(), StoreError>;
}

/// Decode a store document into typed records.
pub fn decode_records<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt(format!("parse failed: {e}")))
}

/// Encode records in the canonical store format: pretty-printed JSON array,
/// 2-space indent.
pub fn encode_records<T: Serialize>(records: &[T]) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(records).map_err(|e| StoreError::Io(format!("encode failed: {e}")))
}

/// The canonical empty store document.
#[must_use]
pub fn empty_store_bytes() -> Vec<u8> {
    b"[]".to_vec()
}
