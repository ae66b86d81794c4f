//! Request Sequencing
//!
//! Last-request-wins bookkeeping for refreshes. Every refresh draws a ticket
//! before it sends its request; when the response comes back it is rendered
//! only if no newer refresh of the same kind has started in the meantime.

use std::cell::Cell;

/// Ticket drawn when a refresh starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn number(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket counter for one kind of refresh
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: Cell<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next ticket
    pub fn issue(&self) -> RequestTicket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        RequestTicket(next)
    }

    /// Whether `ticket` is the most recently issued one
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.issued.get() == ticket.0
    }

    /// Number of tickets issued so far
    pub fn issued(&self) -> u64 {
        self.issued.get()
    }
}

/// What happened to a refresh response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response was rendered
    Applied,
    /// A newer refresh started first, so the response was dropped
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let sequence = RequestSequence::new();

        let first = sequence.issue();
        assert!(sequence.is_latest(first));

        let second = sequence.issue();
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
        assert!(first < second);
        assert_eq!(sequence.issued(), 2);
    }

    #[test]
    fn test_tickets_are_numbered_from_one() {
        let sequence = RequestSequence::new();

        assert_eq!(sequence.issue().number(), 1);
        assert_eq!(sequence.issue().number(), 2);
    }
}
