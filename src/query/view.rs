//! The composed dashboard query.

use super::filter::PaymentFilter;
use super::lookup::{resolve_clients, ProjectRow};
use super::search::{search_clients, search_projects};
use super::stats::DashboardStats;
use crate::core::{Client, Project, Snapshot};
use serde::{Deserialize, Serialize};

/// Search text and filter selection driving the dashboard lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardQuery {
    pub client_search: String,
    pub project_search: String,
    pub payment_filter: PaymentFilter,
}

/// Everything the dashboard shows for one snapshot and one query.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView<'a> {
    pub clients: Vec<&'a Client>,
    pub projects: Vec<ProjectRow<'a>>,
    /// Always computed over the full snapshot, not the filtered lists.
    pub stats: DashboardStats,
}

/// Derive the dashboard lists and statistics.
///
/// Empty search strings mean "no search". The project search runs before
/// the payment filter. Each project is paired with its client, which may be
/// missing.
pub fn dashboard_view<'a>(snapshot: &'a Snapshot, query: &DashboardQuery) -> DashboardView<'a> {
    let clients = if query.client_search.is_empty() {
        snapshot.clients().iter().collect()
    } else {
        search_clients(snapshot.clients(), &query.client_search)
    };

    let searched: Vec<&'a Project> = if query.project_search.is_empty() {
        snapshot.projects().iter().collect()
    } else {
        search_projects(snapshot.projects(), &query.project_search)
    };
    let projects = query.payment_filter.apply(searched);

    DashboardView {
        clients,
        projects: resolve_clients(projects, snapshot.clients()),
        stats: snapshot.stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PaymentStatus, ProjectStatus};

    fn snapshot() -> Snapshot {
        Snapshot::new(
            vec![
                Client::new("c1", "Sarah Johnson", "United States"),
                Client::new("c2", "Michael Chen", "Canada"),
            ],
            vec![
                Project::new("p1", "c1", "E-commerce Website Redesign", 15000.0)
                    .with_status(ProjectStatus::InProgress),
                Project::new("p2", "c2", "Mobile App Development", 25000.0)
                    .with_status(ProjectStatus::Completed)
                    .with_payment_status(PaymentStatus::Paid),
                Project::new("p5", "c7", "Website Audit", 900.0),
            ],
            Vec::new(),
        )
    }

    fn project_ids(view: &DashboardView<'_>) -> Vec<String> {
        view.projects.iter().map(|row| row.project.id.clone()).collect()
    }

    #[test]
    fn default_query_shows_everything() {
        let snapshot = snapshot();
        let view = dashboard_view(&snapshot, &DashboardQuery::default());

        assert_eq!(view.clients.len(), 2);
        assert_eq!(project_ids(&view), vec!["p1", "p2", "p5"]);
        assert_eq!(view.stats, snapshot.stats());
    }

    #[test]
    fn search_then_payment_filter() {
        let snapshot = snapshot();
        let query = DashboardQuery {
            project_search: "website".to_string(),
            payment_filter: PaymentFilter::Unpaid,
            ..DashboardQuery::default()
        };

        let view = dashboard_view(&snapshot, &query);
        assert_eq!(project_ids(&view), vec!["p1", "p5"]);
        assert_eq!(view.projects[1].client_name(), None);
        assert_eq!(view.stats.total_projects, 3);
    }

    #[test]
    fn client_search_narrows_clients_only() {
        let snapshot = snapshot();
        let query = DashboardQuery {
            client_search: "chen".to_string(),
            ..DashboardQuery::default()
        };

        let view = dashboard_view(&snapshot, &query);
        assert_eq!(view.clients.len(), 1);
        assert_eq!(view.clients[0].id, "c2");
        assert_eq!(view.projects.len(), 3);
    }

    #[test]
    fn query_decodes_from_partial_json() {
        let query: DashboardQuery = serde_json::from_str(r#"{"paymentFilter":"paid"}"#).unwrap();
        assert_eq!(query.payment_filter, PaymentFilter::Paid);
        assert!(query.client_search.is_empty());
    }
}
