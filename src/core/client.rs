//! Client records.

use serde::{Deserialize, Serialize};

/// A person or company that commissions projects.
///
/// Clients are immutable once created; the store only ever appends them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Contact address, when the client gave one.
    #[serde(default)]
    pub email: Option<String>,
}

impl Client {
    /// Create a client without an email address.
    pub fn new(id: impl Into<String>, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            email: None,
        }
    }

    /// Attach an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
