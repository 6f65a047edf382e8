//! Checkpoints of a store's snapshot.
//!
//! A checkpoint captures the snapshot and the store revision so a ledger can
//! be saved and rebuilt later. Two encodings are provided: JSON for
//! readability and bincode for compactness. Where the bytes go is up to the
//! caller.

use crate::core::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable capture of a store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Store revision at capture time
    pub revision: u64,

    /// The captured snapshot
    pub snapshot: Snapshot,
}

impl Checkpoint {
    /// Capture `snapshot` at `revision` with a fresh id and the current time.
    pub fn new(snapshot: Snapshot, revision: u64) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            revision,
            snapshot,
        }
    }

    /// Reject checkpoints written by an unknown format version.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::encode("json", e))
    }

    /// Decode from JSON, checking the format version.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::decode("json", e))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Encode with bincode.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::encode("binary", e))
    }

    /// Decode from bincode, checking the format version.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            bincode::deserialize(bytes).map_err(|e| CheckpointError::decode("binary", e))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}
