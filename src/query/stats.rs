//! Dashboard statistics.

use super::filter::count_projects_by_payment;
use crate::core::{Client, Payment, Project, ProjectStatus};
use serde::{Deserialize, Serialize};

/// Project counts per work status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusBreakdown {
    pub fn count(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Pending => self.pending,
            ProjectStatus::InProgress => self.in_progress,
            ProjectStatus::Completed => self.completed,
        }
    }
}

/// Aggregate figures shown at the top of the dashboard.
///
/// `total_revenue` is the raw sum of the payment log. It is not reconciled
/// with budgets or with `paid_projects`: a project can be unpaid and still
/// have partial payments counted here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: usize,
    pub total_projects: usize,
    pub paid_projects: usize,
    pub unpaid_projects: usize,
    pub total_revenue: f64,
    pub projects_by_status: StatusBreakdown,
}

/// Compute dashboard statistics. Linear in the size of each input.
pub fn calculate_stats(
    clients: &[Client],
    projects: &[Project],
    payments: &[Payment],
) -> DashboardStats {
    let payment = count_projects_by_payment(projects);
    let total_revenue: f64 = payments.iter().map(|p| p.amount).sum();

    let projects_by_status =
        projects
            .iter()
            .fold(StatusBreakdown::default(), |mut acc, project| {
                match project.status {
                    ProjectStatus::Pending => acc.pending += 1,
                    ProjectStatus::InProgress => acc.in_progress += 1,
                    ProjectStatus::Completed => acc.completed += 1,
                }
                acc
            });

    DashboardStats {
        total_clients: clients.len(),
        total_projects: projects.len(),
        paid_projects: payment.paid,
        unpaid_projects: payment.unpaid,
        total_revenue,
        projects_by_status,
    }
}
