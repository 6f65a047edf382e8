//! State transitions over snapshots.
//!
//! The pure half is [`transition`], a total function from a snapshot and an
//! [`Action`] to the next snapshot. The imperative half is [`Store`], which
//! owns the current snapshot, applies actions one at a time, and logs what it
//! does.

mod action;
mod ledger;
mod transition;

pub use action::Action;
pub use ledger::Store;
pub use transition::transition;
