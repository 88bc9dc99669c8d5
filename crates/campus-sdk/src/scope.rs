//! View lifetimes for in-flight results
//!
//! A screen captures a ticket when it issues a request and checks it before
//! applying the completion. Leaving the screen invalidates every
//! outstanding ticket, so a late arrival can no longer touch view state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lifetime marker for one screen's outstanding requests
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    epoch: Arc<AtomicU64>,
}

/// Ticket bound to the scope epoch it was issued under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeTicket(u64);

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a request being issued now
    pub fn ticket(&self) -> ScopeTicket {
        ScopeTicket(self.epoch.load(Ordering::Acquire))
    }

    /// True while the issuing screen is still live
    pub fn is_current(&self, ticket: ScopeTicket) -> bool {
        self.epoch.load(Ordering::Acquire) == ticket.0
    }

    /// Invalidate every outstanding ticket. Called when the screen is left.
    pub fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_current_until_invalidated() {
        let scope = ViewScope::new();
        let ticket = scope.ticket();
        assert!(scope.is_current(ticket));

        scope.invalidate();
        assert!(!scope.is_current(ticket));

        // A new ticket picks up the new epoch.
        let next = scope.ticket();
        assert!(scope.is_current(next));
        assert_ne!(ticket, next);
    }

    #[test]
    fn test_invalidate_covers_all_outstanding_tickets() {
        let scope = ViewScope::new();
        let first = scope.ticket();
        let second = scope.ticket();
        scope.invalidate();
        assert!(!scope.is_current(first));
        assert!(!scope.is_current(second));
    }

    #[test]
    fn test_clones_share_the_epoch() {
        let scope = ViewScope::new();
        let handle = scope.clone();
        let ticket = scope.ticket();
        handle.invalidate();
        assert!(!scope.is_current(ticket));
    }
}
