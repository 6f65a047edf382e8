//! Validation errors returned as values by the advisory validators.

use thiserror::Error;

/// Why a payment should not be recorded.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Project not found: {project_id}")]
    ProjectNotFound { project_id: String },

    #[error("Amount must be greater than zero (got {amount})")]
    NonPositiveAmount { amount: f64 },

    #[error("Payment amount {amount} exceeds project budget {budget}")]
    ExceedsBudget { amount: f64, budget: f64 },
}

/// A problem found on a project record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectViolation {
    #[error("Budget must be greater than zero (got {budget})")]
    NonPositiveBudget { budget: f64 },

    #[error("Project title must not be blank")]
    BlankTitle,

    #[error("Client not found: {client_id}")]
    UnknownClient { client_id: String },
}

/// A problem found on a client record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientViolation {
    #[error("Client name must not be blank")]
    BlankName,

    #[error("Email address {email:?} is missing an '@'")]
    MalformedEmail { email: String },
}
