//! Shared trait for the small status machines carried by projects.
//!
//! Both `ProjectStatus` and `PaymentStatus` are closed enums with a stable
//! wire name, a display label and a notion of a "final" position. The
//! `status_enum!` macro generates all of that from one declaration.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Trait for status values tracked on a project.
///
/// All methods are pure. Statuses are plain values; moving between them is
/// the job of the store's transition function, not of the status itself.
///
/// # Example
///
/// ```rust
/// use freelance_ledger::core::{PaymentStatus, ProjectStatus, State};
///
/// assert_eq!(ProjectStatus::InProgress.name(), "in-progress");
/// assert_eq!(ProjectStatus::InProgress.label(), "IN PROGRESS");
/// assert!(PaymentStatus::Paid.is_final());
/// assert!(!PaymentStatus::Unpaid.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Stable wire name, identical to the serialized form.
    fn name(&self) -> &str;

    /// Human readable label for badges and reports.
    fn label(&self) -> &str;

    /// Whether this is the last position of the normal flow.
    ///
    /// Nothing enforces it: a completed project can still be moved back to
    /// pending. Only the payment machine has no way back, because no action
    /// produces `Unpaid` from `Paid`.
    fn is_final(&self) -> bool {
        false
    }
}

/// A string did not name any variant of a status enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownStatus {
    pub kind: &'static str,
    pub value: String,
}

/// Declare a status enum with wire names, labels and final variants.
///
/// Generates the enum (with serde renames), an `ALL` constant in declaration
/// order, and implementations of `State`, `Display` and `FromStr`.
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal, $label:literal
            ),* $(,)?
        }

        final: [$($final:ident),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $wire),*
                }
            }

            fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn is_final(&self) -> bool {
                matches!(self, $(Self::$final)|+)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::core::UnknownStatus;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)*
                    other => Err($crate::core::UnknownStatus {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    status_enum! {
        enum TestStatus {
            Draft => "draft", "DRAFT",
            Sent => "sent", "SENT",
            Settled => "settled", "SETTLED",
        }
        final: [Settled]
    }

    #[test]
    fn name_matches_wire_value() {
        assert_eq!(TestStatus::Draft.name(), "draft");
        assert_eq!(TestStatus::Sent.name(), "sent");
        assert_eq!(TestStatus::Settled.name(), "settled");
    }

    #[test]
    fn label_comes_from_declaration() {
        assert_eq!(TestStatus::Sent.label(), "SENT");
    }

    #[test]
    fn is_final_identifies_listed_variants() {
        assert!(!TestStatus::Draft.is_final());
        assert!(!TestStatus::Sent.is_final());
        assert!(TestStatus::Settled.is_final());
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            TestStatus::ALL,
            &[TestStatus::Draft, TestStatus::Sent, TestStatus::Settled]
        );
    }

    #[test]
    fn from_str_accepts_wire_names_only() {
        assert_eq!("sent".parse::<TestStatus>(), Ok(TestStatus::Sent));

        let err = "Sent".parse::<TestStatus>().unwrap_err();
        assert_eq!(err.kind, "TestStatus");
        assert_eq!(err.value, "Sent");
    }

    #[test]
    fn serializes_as_wire_name() {
        let json = serde_json::to_string(&TestStatus::Settled).unwrap();
        assert_eq!(json, "\"settled\"");

        let back: TestStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestStatus::Settled);
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(TestStatus::Draft.to_string(), "draft");
    }
}
