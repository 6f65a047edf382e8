//! Exact-match project filters.
//!
//! Filters take any iterator of project references so they compose with
//! search results as well as with whole snapshots.

use crate::core::{PaymentStatus, Project, ProjectStatus, UnknownStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Projects whose work status equals `status`, in input order.
pub fn filter_projects_by_status<'a, I>(projects: I, status: ProjectStatus) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .filter(|project| project.status == status)
        .collect()
}

/// Projects whose payment status equals `payment_status`, in input order.
pub fn filter_projects_by_payment<'a, I>(
    projects: I,
    payment_status: PaymentStatus,
) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .filter(|project| project.payment_status == payment_status)
        .collect()
}

/// Paid and unpaid project counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub paid: usize,
    pub unpaid: usize,
}

/// Count projects by payment status in one pass.
pub fn count_projects_by_payment(projects: &[Project]) -> PaymentBreakdown {
    projects
        .iter()
        .fold(PaymentBreakdown::default(), |mut acc, project| {
            match project.payment_status {
                PaymentStatus::Paid => acc.paid += 1,
                PaymentStatus::Unpaid => acc.unpaid += 1,
            }
            acc
        })
}

/// Payment selector of the project list: everything, or one payment status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

impl PaymentFilter {
    /// The payment status this filter keeps, or `None` for `All`.
    pub fn status(self) -> Option<PaymentStatus> {
        match self {
            Self::All => None,
            Self::Paid => Some(PaymentStatus::Paid),
            Self::Unpaid => Some(PaymentStatus::Unpaid),
        }
    }

    /// Apply the filter, keeping order.
    pub fn apply<'a, I>(self, projects: I) -> Vec<&'a Project>
    where
        I: IntoIterator<Item = &'a Project>,
    {
        match self.status() {
            Some(status) => filter_projects_by_payment(projects, status),
            None => projects.into_iter().collect(),
        }
    }
}

impl From<PaymentStatus> for PaymentFilter {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Paid => Self::Paid,
            PaymentStatus::Unpaid => Self::Unpaid,
        }
    }
}

impl fmt::Display for PaymentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
        })
    }
}

impl FromStr for PaymentFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse::<PaymentStatus>().map(Self::from).map_err(|_| {
                UnknownStatus {
                    kind: "PaymentFilter",
                    value: other.to_string(),
                }
            }),
        }
    }
}
