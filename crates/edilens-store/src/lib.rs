//! Edilens Artifact Store
//!
//! Keyed storage for uploaded transaction payloads. Each upload gets an
//! opaque UUIDv7 handle, so concurrent callers cannot clobber each
//! other's payloads the way a single shared slot would.

#![warn(missing_docs)]

use edilens_domain::ArtifactId;
use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Errors that can occur during artifact operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No artifact under the given handle
    #[error("Artifact not found: {0}")]
    NotFound(ArtifactId),

    /// Rejected payload
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// One stored transaction payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionArtifact {
    /// The artifact's handle
    pub id: ArtifactId,

    /// Seconds since Unix epoch at store time
    pub stored_at: u64,

    /// Raw transaction text as uploaded
    pub payload: String,
}

/// In-memory artifact store keyed by opaque handles
///
/// # Thread Safety
///
/// The store itself is not synchronized; wrap it in a `Mutex` when
/// shared across threads. Handles are collision-free regardless.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    artifacts: HashMap<ArtifactId, TransactionArtifact>,
}

impl ArtifactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a payload and return its fresh handle
    ///
    /// # Errors
    ///
    /// Rejects empty payloads; an empty upload is an input-shape error,
    /// not a valid artifact.
    pub fn put(&mut self, payload: impl Into<String>) -> Result<ArtifactId, StoreError> {
        let payload = payload.into();
        if payload.trim().is_empty() {
            return Err(StoreError::InvalidPayload("empty payload".to_string()));
        }

        let id = ArtifactId::new();
        let stored_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::from_secs(0))
            .as_secs();

        self.artifacts.insert(
            id,
            TransactionArtifact {
                id,
                stored_at,
                payload,
            },
        );
        Ok(id)
    }

    /// Fetch an artifact by handle
    pub fn get(&self, id: ArtifactId) -> Result<&TransactionArtifact, StoreError> {
        self.artifacts.get(&id).ok_or(StoreError::NotFound(id))
    }

    /// Remove an artifact, returning it
    pub fn remove(&mut self, id: ArtifactId) -> Result<TransactionArtifact, StoreError> {
        self.artifacts.remove(&id).ok_or(StoreError::NotFound(id))
    }

    /// Number of stored artifacts
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut store = ArtifactStore::new();
        let id = store.put("ST*855*0001~").unwrap();

        let artifact = store.get(id).unwrap();
        assert_eq!(artifact.payload, "ST*855*0001~");
        assert_eq!(artifact.id, id);
    }

    #[test]
    fn test_uploads_do_not_clobber_each_other() {
        let mut store = ArtifactStore::new();
        let first = store.put("ST*855*0001~").unwrap();
        let second = store.put("ST*855*0002~").unwrap();

        assert_ne!(first, second);
        assert_eq!(store.get(first).unwrap().payload, "ST*855*0001~");
        assert_eq!(store.get(second).unwrap().payload, "ST*855*0002~");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_payload_rejected() {
        let mut store = ArtifactStore::new();
        assert!(matches!(
            store.put("   \n"),
            Err(StoreError::InvalidPayload(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_unknown_handle() {
        let store = ArtifactStore::new();
        assert!(matches!(
            store.get(ArtifactId::new()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove() {
        let mut store = ArtifactStore::new();
        let id = store.put("GS*PR~").unwrap();

        let artifact = store.remove(id).unwrap();
        assert_eq!(artifact.payload, "GS*PR~");
        assert!(store.is_empty());
        assert!(store.remove(id).is_err());
    }
}
