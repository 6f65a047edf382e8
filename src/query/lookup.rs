//! Resolving soft references.

use crate::core::{Client, Project};

/// Find a client by id. A dangling id gives `None`.
pub fn find_client_by_id<'a>(clients: &'a [Client], id: &str) -> Option<&'a Client> {
    clients.iter().find(|client| client.id == id)
}

/// Find a project by id. A dangling id gives `None`.
pub fn find_project_by_id<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.id == id)
}

/// A project paired with the client it references, if that client exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectRow<'a> {
    pub project: &'a Project,
    pub client: Option<&'a Client>,
}

impl<'a> ProjectRow<'a> {
    /// Name of the owning client, or `None` when the reference dangles.
    pub fn client_name(&self) -> Option<&'a str> {
        self.client.map(|client| client.name.as_str())
    }
}

/// Pair every project with its client, keeping project order.
pub fn resolve_clients<'a, I>(projects: I, clients: &'a [Client]) -> Vec<ProjectRow<'a>>
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .map(|project| ProjectRow {
            project,
            client: find_client_by_id(clients, &project.client_id),
        })
        .collect()
}
