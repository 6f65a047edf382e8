//! Actions accepted by the store.

use crate::core::{Client, Payment, Project, ProjectStatus};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One requested change to a [`Snapshot`](crate::core::Snapshot).
///
/// On the wire an action is a JSON object with a `type` tag and a `payload`:
///
/// ```json
/// {"type": "UPDATE_PROJECT_STATUS", "payload": {"projectId": "p1", "status": "completed"}}
/// ```
///
/// A `type` this enum does not know decodes to [`Action::Unknown`] whatever
/// its payload, and the transition function passes it through without
/// touching the snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddClient(Client),
    AddProject(Project),
    AddPayment(Payment),
    #[serde(rename_all = "camelCase")]
    MarkProjectPaid { project_id: String },
    #[serde(rename_all = "camelCase")]
    UpdateProjectStatus {
        project_id: String,
        status: ProjectStatus,
    },
    #[serde(rename_all = "camelCase")]
    DeleteProject { project_id: String },
    /// Any action kind this version does not recognize.
    Unknown,
}

impl Action {
    pub fn mark_paid(project_id: impl Into<String>) -> Self {
        Self::MarkProjectPaid {
            project_id: project_id.into(),
        }
    }

    pub fn update_status(project_id: impl Into<String>, status: ProjectStatus) -> Self {
        Self::UpdateProjectStatus {
            project_id: project_id.into(),
            status,
        }
    }

    pub fn delete_project(project_id: impl Into<String>) -> Self {
        Self::DeleteProject {
            project_id: project_id.into(),
        }
    }

    /// Wire tag of this action, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddClient(_) => "ADD_CLIENT",
            Self::AddProject(_) => "ADD_PROJECT",
            Self::AddPayment(_) => "ADD_PAYMENT",
            Self::MarkProjectPaid { .. } => "MARK_PROJECT_PAID",
            Self::UpdateProjectStatus { .. } => "UPDATE_PROJECT_STATUS",
            Self::DeleteProject { .. } => "DELETE_PROJECT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// `{type, payload}` as read off the wire, before the tag is interpreted.
#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRef {
    project_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusChange {
    project_id: String,
    status: ProjectStatus,
}

impl Envelope {
    fn into_action(self) -> Result<Action, serde_json::Error> {
        let payload = self.payload;
        let action = match self.kind.as_str() {
            "ADD_CLIENT" => Action::AddClient(serde_json::from_value(payload)?),
            "ADD_PROJECT" => Action::AddProject(serde_json::from_value(payload)?),
            "ADD_PAYMENT" => Action::AddPayment(serde_json::from_value(payload)?),
            "MARK_PROJECT_PAID" => {
                let ProjectRef { project_id } = serde_json::from_value(payload)?;
                Action::MarkProjectPaid { project_id }
            }
            "UPDATE_PROJECT_STATUS" => {
                let StatusChange { project_id, status } = serde_json::from_value(payload)?;
                Action::UpdateProjectStatus { project_id, status }
            }
            "DELETE_PROJECT" => {
                let ProjectRef { project_id } = serde_json::from_value(payload)?;
                Action::DeleteProject { project_id }
            }
            _ => Action::Unknown,
        };
        Ok(action)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Envelope::deserialize(deserializer)?
            .into_action()
            .map_err(de::Error::custom)
    }
}
