//! Derived views over snapshots.
//!
//! Every function here is pure: it borrows a snapshot (or one of its
//! collections), never mutates it, and returns the same result for the same
//! input. Filtered lists are returned as references in input order.

mod error;
mod filter;
mod lookup;
mod search;
mod stats;
mod validate;
mod view;

pub use error::{ClientViolation, PaymentError, ProjectViolation};
pub use filter::{
    count_projects_by_payment, filter_projects_by_payment, filter_projects_by_status,
    PaymentBreakdown, PaymentFilter,
};
pub use lookup::{find_client_by_id, find_project_by_id, resolve_clients, ProjectRow};
pub use search::{search_clients, search_projects};
pub use stats::{calculate_stats, DashboardStats, StatusBreakdown};
pub use validate::{validate_client, validate_payment, validate_project};
pub use view::{dashboard_view, DashboardQuery, DashboardView};
