//! Core data model.
//!
//! This module contains the plain values the ledger is made of:
//! - Clients, projects and payments
//! - The two project status machines, described through the `State` trait
//! - The `Snapshot` aggregate that owns all of them
//!
//! Everything here is pure data; state changes live in [`crate::store`].

#[macro_use]
mod state;

mod client;
mod payment;
mod project;
mod snapshot;

pub use client::Client;
pub use payment::Payment;
pub use project::{PaymentStatus, Project, ProjectStatus};
pub use snapshot::Snapshot;
pub use state::{State, UnknownStatus};
