//! Payment log entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Money received against a project.
///
/// Payments are append-only. `project_id` is a soft reference: nothing
/// guarantees the project still exists, and the amount is not reconciled
/// against the project's budget unless a caller runs
/// [`validate_payment`](crate::query::validate_payment).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub project_id: String,
    pub amount: f64,
    /// Calendar date of the payment, `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
}

impl Payment {
    pub fn new(project_id: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            project_id: project_id.into(),
            amount,
            date,
        }
    }
}
