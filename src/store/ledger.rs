//! The store that owns the current snapshot.

use super::{transition, Action};
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{Payment, Snapshot};
use crate::query::{validate_payment, PaymentError};
use tracing::{debug, trace, warn};

/// Owner of the current snapshot and its single writer path.
///
/// Construct one per application instance and hand out references to it.
/// Readers borrow [`Store::snapshot`]; writers go through
/// [`Store::dispatch`], which requires `&mut self`, so no reader can observe
/// a snapshot while it is being replaced.
#[derive(Clone, Debug, Default)]
pub struct Store {
    current: Snapshot,
    revision: u64,
}

impl Store {
    /// Create a store holding `initial`.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: initial,
            revision: 0,
        }
    }

    /// Borrow the snapshot every reader should see right now.
    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    /// Number of dispatches that changed the snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an action to the current snapshot.
    ///
    /// Never fails. Actions naming unknown ids leave the snapshot, and the
    /// revision, untouched.
    pub fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        debug!(action = kind, revision = self.revision, "dispatching action");

        let next = transition(&self.current, action);
        if next.shares_all_with(&self.current) {
            trace!(action = kind, "action left the snapshot unchanged");
            return;
        }
        self.current = next;
        self.revision += 1;
    }

    /// Validate a payment against the current projects, then record it.
    ///
    /// This is the opt-in checked path. [`Action::AddPayment`] dispatched
    /// directly is never validated.
    pub fn record_payment(&mut self, payment: Payment) -> Result<(), PaymentError> {
        if let Err(err) = validate_payment(&payment, self.current.projects()) {
            warn!(
                project_id = %payment.project_id,
                amount = payment.amount,
                error = %err,
                "rejected payment"
            );
            return Err(err);
        }
        self.dispatch(Action::AddPayment(payment));
        Ok(())
    }

    /// Capture the current snapshot and revision.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.current.clone(), self.revision)
    }

    /// Rebuild a store from a checkpoint.
    pub fn from_checkpoint(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        debug!(
            checkpoint_id = %checkpoint.id,
            revision = checkpoint.revision,
            "restoring store from checkpoint"
        );
        Ok(Self {
            current: checkpoint.snapshot,
            revision: checkpoint.revision,
        })
    }
}
