//! The aggregate root holding every client, project and payment.

use super::{Client, Payment, Project};
use crate::query::{calculate_stats, DashboardStats};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Full, immutable state of the ledger at one point in time.
///
/// Each collection sits behind an `Arc`, so a transition that touches only
/// projects hands the same client and payment allocations to the next
/// snapshot. Insertion order is preserved and is the display order.
///
/// # Example
///
/// ```rust
/// use freelance_ledger::core::{Client, Snapshot};
///
/// let snapshot = Snapshot::new(
///     vec![Client::new("c1", "Sarah Johnson", "United States")],
///     Vec::new(),
///     Vec::new(),
/// );
///
/// assert_eq!(snapshot.clients().len(), 1);
/// assert!(snapshot.projects().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) clients: Arc<Vec<Client>>,
    pub(crate) projects: Arc<Vec<Project>>,
    pub(crate) payments: Arc<Vec<Payment>>,
}

impl Snapshot {
    pub fn new(clients: Vec<Client>, projects: Vec<Project>, payments: Vec<Payment>) -> Self {
        Self {
            clients: Arc::new(clients),
            projects: Arc::new(projects),
            payments: Arc::new(payments),
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Dashboard statistics over the whole snapshot.
    pub fn stats(&self) -> DashboardStats {
        calculate_stats(&self.clients, &self.projects, &self.payments)
    }

    /// Whether `other` reuses this snapshot's client allocation.
    pub fn shares_clients_with(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.clients, &other.clients)
    }

    /// Whether `other` reuses this snapshot's project allocation.
    pub fn shares_projects_with(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.projects, &other.projects)
    }

    /// Whether `other` reuses this snapshot's payment allocation.
    pub fn shares_payments_with(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.payments, &other.payments)
    }

    /// Whether `other` reuses all three allocations of this snapshot.
    ///
    /// Unlike `==` this holds for a snapshot whose payment log contains a
    /// NaN amount, so it is what decides if a transition changed anything.
    pub fn shares_all_with(&self, other: &Snapshot) -> bool {
        self.shares_clients_with(other)
            && self.shares_projects_with(other)
            && self.shares_payments_with(other)
    }
}
