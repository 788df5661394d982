// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The ticket status state machine.
//!
//! `Pending` is the initial state. Work starts with `In Progress`; the
//! terminal states are `Resolved` and `Rejected`. A Pending ticket may be
//! rejected without work starting, but resolving always passes through
//! `In Progress`. Terminal states allow a reopen back to `In Progress`
//! only when the policy flag permits it.

use redress_config::model::LifecycleConfig;
use redress_core::TicketStatus;

/// Policy knobs affecting which transitions the state machine allows.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionPolicy {
    /// Permit `Resolved`/`Rejected` -> `In Progress`.
    pub allow_reopen: bool,
}

impl From<&LifecycleConfig> for TransitionPolicy {
    fn from(config: &LifecycleConfig) -> Self {
        Self {
            allow_reopen: config.allow_reopen,
        }
    }
}

/// Whether the state machine permits `from -> to` under the given policy.
pub fn is_allowed(from: TicketStatus, to: TicketStatus, policy: TransitionPolicy) -> bool {
    use TicketStatus::*;
    match (from, to) {
        (Pending, InProgress) | (Pending, Rejected) => true,
        (InProgress, Resolved) | (InProgress, Rejected) => true,
        (Resolved, InProgress) | (Rejected, InProgress) => policy.allow_reopen,
        _ => false,
    }
}

/// All source statuses from which `to` is reachable under the policy.
///
/// This is the per-target slice of the transition table, handed to the
/// storage layer so the check runs against committed state inside the
/// write transaction.
pub fn permitted_sources(to: TicketStatus, policy: TransitionPolicy) -> Vec<TicketStatus> {
    [
        TicketStatus::Pending,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Rejected,
    ]
    .into_iter()
    .filter(|from| is_allowed(*from, to, policy))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use TicketStatus::*;

    const NO_REOPEN: TransitionPolicy = TransitionPolicy { allow_reopen: false };
    const REOPEN: TransitionPolicy = TransitionPolicy { allow_reopen: true };

    #[test]
    fn pending_can_start_or_be_rejected() {
        assert!(is_allowed(Pending, InProgress, NO_REOPEN));
        assert!(is_allowed(Pending, Rejected, NO_REOPEN));
    }

    #[test]
    fn pending_cannot_resolve_directly() {
        assert!(!is_allowed(Pending, Resolved, NO_REOPEN));
        assert!(!is_allowed(Pending, Resolved, REOPEN));
    }

    #[test]
    fn in_progress_reaches_both_terminals() {
        assert!(is_allowed(InProgress, Resolved, NO_REOPEN));
        assert!(is_allowed(InProgress, Rejected, NO_REOPEN));
    }

    #[test]
    fn terminals_are_final_without_reopen_policy() {
        for terminal in [Resolved, Rejected] {
            for to in [Pending, InProgress, Resolved, Rejected] {
                assert!(!is_allowed(terminal, to, NO_REOPEN));
            }
        }
    }

    #[test]
    fn reopen_policy_only_permits_in_progress() {
        assert!(is_allowed(Resolved, InProgress, REOPEN));
        assert!(is_allowed(Rejected, InProgress, REOPEN));
        assert!(!is_allowed(Resolved, Pending, REOPEN));
        assert!(!is_allowed(Resolved, Rejected, REOPEN));
    }

    #[test]
    fn no_self_transitions() {
        for status in [Pending, InProgress, Resolved, Rejected] {
            assert!(!is_allowed(status, status, REOPEN));
        }
    }

    #[test]
    fn nothing_returns_to_pending() {
        assert!(permitted_sources(Pending, REOPEN).is_empty());
    }

    #[test]
    fn permitted_sources_match_table() {
        assert_eq!(permitted_sources(InProgress, NO_REOPEN), vec![Pending]);
        assert_eq!(
            permitted_sources(InProgress, REOPEN),
            vec![Pending, Resolved, Rejected]
        );
        assert_eq!(permitted_sources(Resolved, NO_REOPEN), vec![InProgress]);
        assert_eq!(
            permitted_sources(Rejected, NO_REOPEN),
            vec![Pending, InProgress]
        );
    }
}
