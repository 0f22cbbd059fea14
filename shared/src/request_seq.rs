//! Guards against out-of-order responses: only the most recently issued
//! request may apply its result.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Ticket handed out by [`RequestSequencer::issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Returns `value` only if `ticket` is still the latest one.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(ticket = ticket.0, "discarding stale response");
            None
        }
    }

    /// Invalidates every outstanding ticket, e.g. when the view unmounts.
    pub fn cancel_all(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_ticket_supersedes_earlier() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(first < second);
    }

    #[test]
    fn slow_first_response_is_discarded() {
        let seq = RequestSequencer::new();
        let slow = seq.issue();
        let fast = seq.issue();
        // fast resolves first, then the slow one arrives late
        assert_eq!(seq.accept(fast, "page 2"), Some("page 2"));
        assert_eq!(seq.accept(slow, "page 1"), None);
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = RequestSequencer::new();
        let clone = seq.clone();
        let ticket = seq.issue();
        clone.issue();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn cancel_all_invalidates_outstanding() {
        let seq = RequestSequencer::new();
        let ticket = seq.issue();
        seq.cancel_all();
        assert_eq!(seq.accept(ticket, ()), None);
    }
}
