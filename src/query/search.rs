//! Case-insensitive text search.
//!
//! An empty query matches everything. Callers that want "no filter" on
//! empty input skip the call themselves.

use crate::core::{Client, Project};

/// Clients whose name contains `query`, ignoring case.
pub fn search_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    let needle = query.to_lowercase();
    clients
        .iter()
        .filter(|client| client.name.to_lowercase().contains(&needle))
        .collect()
}

/// Projects whose title contains `query`, ignoring case.
pub fn search_projects<'a, I>(projects: I, query: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let needle = query.to_lowercase();
    projects
        .into_iter()
        .filter(|project| project.title.to_lowercase().contains(&needle))
        .collect()
}
