//! The pure transition function.

use super::Action;
use crate::core::{PaymentStatus, Project, Snapshot};
use std::sync::Arc;

/// Apply one action to a snapshot, returning the next snapshot.
///
/// The function is total and pure: it never fails, never mutates `snapshot`,
/// and equal inputs give structurally equal outputs. Actions that name a
/// project id nobody has are silent no-ops. Collections the action does not
/// touch are shared with the input.
///
/// # Example
///
/// ```rust
/// use freelance_ledger::core::{PaymentStatus, Project, Snapshot};
/// use freelance_ledger::store::{transition, Action};
///
/// let before = Snapshot::new(
///     Vec::new(),
///     vec![Project::new("p1", "c1", "Logo refresh", 1200.0)],
///     Vec::new(),
/// );
///
/// let after = transition(&before, Action::mark_paid("p1"));
///
/// assert_eq!(after.projects()[0].payment_status, PaymentStatus::Paid);
/// assert_eq!(before.projects()[0].payment_status, PaymentStatus::Unpaid);
/// ```
pub fn transition(snapshot: &Snapshot, action: Action) -> Snapshot {
    match action {
        Action::AddClient(client) => Snapshot {
            clients: appended(&snapshot.clients, client),
            ..snapshot.clone()
        },
        Action::AddProject(project) => Snapshot {
            projects: appended(&snapshot.projects, project),
            ..snapshot.clone()
        },
        Action::AddPayment(payment) => Snapshot {
            payments: appended(&snapshot.payments, payment),
            ..snapshot.clone()
        },
        Action::MarkProjectPaid { project_id } => {
            update_projects(
                snapshot,
                &project_id,
                |project| !project.payment_status.is_paid(),
                |project| project.payment_status = PaymentStatus::Paid,
            )
        }
        Action::UpdateProjectStatus { project_id, status } => {
            update_projects(
                snapshot,
                &project_id,
                |project| project.status != status,
                |project| project.status = status,
            )
        }
        Action::DeleteProject { project_id } => {
            if !contains_project(snapshot, &project_id) {
                return snapshot.clone();
            }
            let projects = snapshot
                .projects
                .iter()
                .filter(|project| project.id != project_id)
                .cloned()
                .collect();
            Snapshot {
                projects: Arc::new(projects),
                ..snapshot.clone()
            }
        }
        Action::Unknown => snapshot.clone(),
    }
}

fn appended<T: Clone>(items: &Arc<Vec<T>>, item: T) -> Arc<Vec<T>> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend(items.iter().cloned());
    next.push(item);
    Arc::new(next)
}

fn contains_project(snapshot: &Snapshot, project_id: &str) -> bool {
    snapshot.projects.iter().any(|project| project.id == project_id)
}

/// Apply `apply` to every project with `project_id`.
///
/// When no such project satisfies `needs_update` the input is returned as is,
/// sharing its collections.
fn update_projects<P, F>(
    snapshot: &Snapshot,
    project_id: &str,
    needs_update: P,
    apply: F,
) -> Snapshot
where
    P: Fn(&Project) -> bool,
    F: Fn(&mut Project),
{
    let changes = snapshot
        .projects
        .iter()
        .any(|project| project.id == project_id && needs_update(project));
    if !changes {
        return snapshot.clone();
    }
    let projects = snapshot
        .projects
        .iter()
        .map(|project| {
            let mut next = project.clone();
            if next.id == project_id {
                apply(&mut next);
            }
            next
        })
        .collect();
    Snapshot {
        projects: Arc::new(projects),
        ..snapshot.clone()
    }
}
