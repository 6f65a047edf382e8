//! Advisory validators.
//!
//! Nothing in the store calls these. Callers that want validation run them
//! before dispatching, or use [`Store::record_payment`](crate::store::Store::record_payment).
//!
//! Payments are checked fail-fast and return the first problem. Projects and
//! clients are checked with `Validation`, which accumulates every violation
//! instead of stopping at the first.

use super::error::{ClientViolation, PaymentError, ProjectViolation};
use super::lookup::{find_client_by_id, find_project_by_id};
use crate::core::{Client, Payment, Project};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check a payment against the project it references.
///
/// In order: the project must exist, the amount must be strictly positive
/// (NaN is not), and the amount must not exceed the project's budget.
///
/// # Example
///
/// ```rust
/// use freelance_ledger::core::{Payment, Project};
/// use freelance_ledger::query::{validate_payment, PaymentError};
/// use chrono::NaiveDate;
///
/// let projects = vec![Project::new("p1", "c1", "Redesign", 15000.0)];
/// let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
///
/// let result = validate_payment(&Payment::new("p1", 20000.0, date), &projects);
/// assert!(matches!(result, Err(PaymentError::ExceedsBudget { .. })));
///
/// assert!(validate_payment(&Payment::new("p1", 7500.0, date), &projects).is_ok());
/// ```
pub fn validate_payment(payment: &Payment, projects: &[Project]) -> Result<(), PaymentError> {
    let project = find_project_by_id(projects, &payment.project_id).ok_or_else(|| {
        PaymentError::ProjectNotFound {
            project_id: payment.project_id.clone(),
        }
    })?;

    if payment.amount.is_nan() || payment.amount <= 0.0 {
        return Err(PaymentError::NonPositiveAmount {
            amount: payment.amount,
        });
    }

    if payment.amount > project.budget {
        return Err(PaymentError::ExceedsBudget {
            amount: payment.amount,
            budget: project.budget,
        });
    }

    Ok(())
}

/// Check a project record, accumulating ALL violations.
///
/// The budget must be positive, the title must not be blank, and the client
/// reference should resolve against `clients`.
pub fn validate_project(
    project: &Project,
    clients: &[Client],
) -> Validation<(), NonEmptyVec<ProjectViolation>> {
    let checks = vec![
        check(project.budget > 0.0, || ProjectViolation::NonPositiveBudget {
            budget: project.budget,
        }),
        check(!project.title.trim().is_empty(), || {
            ProjectViolation::BlankTitle
        }),
        check(
            find_client_by_id(clients, &project.client_id).is_some(),
            || ProjectViolation::UnknownClient {
                client_id: project.client_id.clone(),
            },
        ),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Check a client record, accumulating ALL violations.
pub fn validate_client(client: &Client) -> Validation<(), NonEmptyVec<ClientViolation>> {
    let mut checks = vec![check(!client.name.trim().is_empty(), || {
        ClientViolation::BlankName
    })];

    if let Some(email) = &client.email {
        checks.push(check(email.contains('@'), || {
            ClientViolation::MalformedEmail {
                email: email.clone(),
            }
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check<E, F>(passed: bool, violation: F) -> Validation<(), NonEmptyVec<E>>
where
    F: FnOnce() -> E,
{
    if passed {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}
