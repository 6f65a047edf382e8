//! Failures while saving or restoring a ledger checkpoint.

use thiserror::Error;

/// Why a snapshot checkpoint could not be written or read back.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The snapshot could not be written in the requested format.
    #[error("could not encode checkpoint as {format}: {reason}")]
    Encode { format: &'static str, reason: String },

    /// The input is not a checkpoint in the expected format, or its snapshot
    /// is malformed (a bad payment date, an unknown status name).
    #[error("could not decode {format} checkpoint: {reason}")]
    Decode { format: &'static str, reason: String },

    /// Written by a different checkpoint layout; restoring it could
    /// misread the snapshot.
    #[error("checkpoint version {found} cannot be restored, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

impl CheckpointError {
    pub(crate) fn encode(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Encode {
            format,
            reason: err.to_string(),
        }
    }

    pub(crate) fn decode(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            format,
            reason: err.to_string(),
        }
    }
}
