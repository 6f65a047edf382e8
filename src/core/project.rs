//! Projects and their two status machines.

use serde::{Deserialize, Serialize};

status_enum! {
    /// Work progress of a project.
    ///
    /// There is no enforced transition graph: any status can follow any
    /// other through `Action::UpdateProjectStatus`.
    pub enum ProjectStatus {
        Pending => "pending", "PENDING",
        InProgress => "in-progress", "IN PROGRESS",
        Completed => "completed", "COMPLETED",
    }
    final: [Completed]
}

status_enum! {
    /// Whether a project has been paid for.
    ///
    /// Only `Unpaid -> Paid` is reachable through the store.
    pub enum PaymentStatus {
        Paid => "paid", "PAID",
        Unpaid => "unpaid", "UNPAID",
    }
    final: [Paid]
}

impl PaymentStatus {
    pub fn is_paid(self) -> bool {
        self == Self::Paid
    }
}

/// A unit of billable work for a client.
///
/// `budget` is expected to be positive but the store does not check it;
/// see [`validate_project`](crate::query::validate_project).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    /// Soft reference to a [`Client`](super::Client); may dangle.
    pub client_id: String,
    pub title: String,
    pub budget: f64,
    pub status: ProjectStatus,
    pub payment_status: PaymentStatus,
}

impl Project {
    /// Create a pending, unpaid project.
    pub fn new(
        id: impl Into<String>,
        client_id: impl Into<String>,
        title: impl Into<String>,
        budget: f64,
    ) -> Self {
        Self {
            id: id.into(),
            client_id: client_id.into(),
            title: title.into(),
            budget,
            status: ProjectStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }
}
