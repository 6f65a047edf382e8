//! Property-based tests for the transition function and derived views.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated snapshots and actions.

use chrono::NaiveDate;
use freelance_ledger::core::{Client, Payment, PaymentStatus, Project, ProjectStatus, Snapshot};
use freelance_ledger::query::{
    calculate_stats, filter_projects_by_payment, filter_projects_by_status, find_client_by_id,
    search_clients,
};
use freelance_ledger::store::{transition, Action, Store};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_project_status()(variant in 0..3u8) -> ProjectStatus {
        match variant {
            0 => ProjectStatus::Pending,
            1 => ProjectStatus::InProgress,
            _ => ProjectStatus::Completed,
        }
    }
}

prop_compose! {
    fn arbitrary_payment_status()(paid in any::<bool>()) -> PaymentStatus {
        if paid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        }
    }
}

prop_compose! {
    fn project_id()(n in 0..5u8) -> String {
        format!("p{n}")
    }
}

prop_compose! {
    fn arbitrary_client()(
        n in 0..5u8,
        name in "[A-Za-z ]{0,12}",
        country in "[A-Za-z]{2,8}",
        email in proptest::option::of("[a-z]{1,6}@[a-z]{1,6}\\.com"),
    ) -> Client {
        Client {
            id: format!("c{n}"),
            name,
            country,
            email,
        }
    }
}

prop_compose! {
    fn arbitrary_project()(
        id in project_id(),
        client in 0..6u8,
        title in "[A-Za-z ]{1,16}",
        budget in 1u32..50_000,
        status in arbitrary_project_status(),
        payment_status in arbitrary_payment_status(),
    ) -> Project {
        Project {
            id,
            client_id: format!("c{client}"),
            title,
            budget: f64::from(budget),
            status,
            payment_status,
        }
    }
}

prop_compose! {
    fn arbitrary_payment()(
        project_id in project_id(),
        amount in 1u32..50_000,
        day in 0..365u32,
    ) -> Payment {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Payment {
            project_id,
            amount: f64::from(amount),
            date: base + chrono::Days::new(u64::from(day)),
        }
    }
}

prop_compose! {
    fn arbitrary_snapshot()(
        clients in prop::collection::vec(arbitrary_client(), 0..5),
        projects in prop::collection::vec(arbitrary_project(), 0..8),
        payments in prop::collection::vec(arbitrary_payment(), 0..8),
    ) -> Snapshot {
        Snapshot::new(clients, projects, payments)
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arbitrary_client().prop_map(Action::AddClient),
        arbitrary_project().prop_map(Action::AddProject),
        arbitrary_payment().prop_map(Action::AddPayment),
        project_id().prop_map(|id| Action::mark_paid(id)),
        (project_id(), arbitrary_project_status())
            .prop_map(|(id, status)| Action::update_status(id, status)),
        project_id().prop_map(|id| Action::delete_project(id)),
        Just(Action::Unknown),
    ]
}

proptest! {
    #[test]
    fn unknown_action_is_identity(snapshot in arbitrary_snapshot()) {
        let next = transition(&snapshot, Action::Unknown);
        prop_assert_eq!(next, snapshot);
    }

    #[test]
    fn transition_never_mutates_input(
        snapshot in arbitrary_snapshot(),
        action in arbitrary_action(),
    ) {
        let before = snapshot.clone();
        let _ = transition(&snapshot, action);
        prop_assert_eq!(snapshot, before);
    }

    #[test]
    fn transition_is_deterministic(
        snapshot in arbitrary_snapshot(),
        action in arbitrary_action(),
    ) {
        let first = transition(&snapshot, action.clone());
        let second = transition(&snapshot, action);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn mark_paid_on_missing_id_leaves_projects(snapshot in arbitrary_snapshot()) {
        let next = transition(&snapshot, Action::mark_paid("no-such-project"));
        prop_assert_eq!(next.projects(), snapshot.projects());
    }

    #[test]
    fn mark_paid_is_idempotent(snapshot in arbitrary_snapshot(), id in project_id()) {
        let once = transition(&snapshot, Action::mark_paid(id.clone()));
        let twice = transition(&once, Action::mark_paid(id.clone()));
        prop_assert_eq!(&twice, &once);

        for project in once.projects().iter().filter(|p| p.id == id) {
            prop_assert_eq!(project.payment_status, PaymentStatus::Paid);
        }
    }

    #[test]
    fn delete_twice_equals_delete_once(snapshot in arbitrary_snapshot(), id in project_id()) {
        let once = transition(&snapshot, Action::delete_project(id.clone()));
        let twice = transition(&once, Action::delete_project(id.clone()));

        prop_assert_eq!(&twice, &once);
        prop_assert!(once.projects().iter().all(|p| p.id != id));
    }

    #[test]
    fn update_status_leaves_payment_status(
        snapshot in arbitrary_snapshot(),
        id in project_id(),
        status in arbitrary_project_status(),
    ) {
        let next = transition(&snapshot, Action::update_status(id.clone(), status));

        prop_assert_eq!(next.projects().len(), snapshot.projects().len());
        for (before, after) in snapshot.projects().iter().zip(next.projects()) {
            prop_assert_eq!(before.payment_status, after.payment_status);
            if after.id == id {
                prop_assert_eq!(after.status, status);
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn revenue_is_sum_of_payments(snapshot in arbitrary_snapshot()) {
        let stats = calculate_stats(snapshot.clients(), snapshot.projects(), snapshot.payments());
        let expected: f64 = snapshot.payments().iter().map(|p| p.amount).sum();
        prop_assert_eq!(stats.total_revenue, expected);
    }

    #[test]
    fn stats_counts_partition_projects(snapshot in arbitrary_snapshot()) {
        let stats = snapshot.stats();
        let by_status = stats.projects_by_status;

        prop_assert_eq!(stats.total_clients, snapshot.clients().len());
        prop_assert_eq!(stats.paid_projects + stats.unpaid_projects, stats.total_projects);
        prop_assert_eq!(
            by_status.pending + by_status.in_progress + by_status.completed,
            stats.total_projects
        );
        prop_assert_eq!(
            stats.paid_projects,
            filter_projects_by_payment(snapshot.projects(), PaymentStatus::Paid).len()
        );
        prop_assert_eq!(
            by_status.pending,
            filter_projects_by_status(snapshot.projects(), ProjectStatus::Pending).len()
        );
    }

    #[test]
    fn client_search_ignores_ascii_case(
        snapshot in arbitrary_snapshot(),
        query in "[a-zA-Z]{0,3}",
    ) {
        let lower = search_clients(snapshot.clients(), &query.to_lowercase());
        let upper = search_clients(snapshot.clients(), &query.to_uppercase());
        prop_assert_eq!(&lower, &upper);

        // Results keep the order of the input.
        let positions: Vec<usize> = lower
            .iter()
            .filter_map(|found| snapshot.clients().iter().position(|c| std::ptr::eq(c, *found)))
            .collect();
        prop_assert_eq!(positions.len(), lower.len());
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn dangling_client_lookup_is_absent(snapshot in arbitrary_snapshot()) {
        prop_assert!(find_client_by_id(snapshot.clients(), "c-dangling").is_none());
    }

    #[test]
    fn store_revision_counts_changing_dispatches(
        snapshot in arbitrary_snapshot(),
        actions in prop::collection::vec(arbitrary_action(), 0..10),
    ) {
        let mut store = Store::new(snapshot.clone());
        let mut expected = snapshot;
        let mut changes = 0u64;

        for action in actions {
            let next = transition(&expected, action.clone());
            if !next.shares_all_with(&expected) {
                prop_assert_ne!(&next, &expected);
                changes += 1;
            }
            expected = next;
            store.dispatch(action);
        }

        prop_assert_eq!(store.snapshot(), &expected);
        prop_assert_eq!(store.revision(), changes);
    }
}
