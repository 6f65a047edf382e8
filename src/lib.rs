//! Freelance Ledger: a pure functional core for a freelance dashboard
//!
//! The ledger tracks clients, the projects done for them, and the payments
//! received. It follows a "pure core, imperative shell" layout: all state
//! lives in immutable snapshots, changes are computed by a pure transition
//! function, and a small store owns the current snapshot.
//!
//! # Core Concepts
//!
//! - **Snapshot**: the full state of clients, projects and payments
//! - **Action**: one requested change, as a closed sum type
//! - **Transition**: pure `(Snapshot, Action) -> Snapshot`, never fails
//! - **Queries**: lookup, search, filters, statistics and advisory validation
//!
//! # Example
//!
//! ```rust
//! use freelance_ledger::core::{Client, Project, ProjectStatus, Snapshot};
//! use freelance_ledger::query::search_clients;
//! use freelance_ledger::store::{Action, Store};
//!
//! let mut store = Store::new(Snapshot::default());
//! store.dispatch(Action::AddClient(Client::new("c1", "Sarah Johnson", "United States")));
//! store.dispatch(Action::AddProject(Project::new("p1", "c1", "Website Redesign", 15000.0)));
//! store.dispatch(Action::update_status("p1", ProjectStatus::Completed));
//! store.dispatch(Action::mark_paid("p1"));
//!
//! let stats = store.snapshot().stats();
//! assert_eq!(stats.paid_projects, 1);
//! assert_eq!(stats.projects_by_status.completed, 1);
//!
//! let found = search_clients(store.snapshot().clients(), "sarah");
//! assert_eq!(found.len(), 1);
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod format;
pub mod query;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Client, Payment, PaymentStatus, Project, ProjectStatus, Snapshot, State};
pub use store::{transition, Action, Store};
