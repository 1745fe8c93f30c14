//! Request sequence tokens.
//!
//! Each fetch target (the tree, the member popup) owns one
//! [`RequestSequence`]. Issuing a request hands out a fresh [`Ticket`];
//! a response is applied only while its ticket is still the latest one
//! issued for that target.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    next: u64,
    latest: Option<Ticket>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes every earlier one.
    pub fn issue(&mut self) -> Ticket {
        let ticket = Ticket(self.next);
        self.next += 1;
        self.latest = Some(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest == Some(ticket)
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.latest = None;
    }

    /// Mark the response for `ticket` as received. Nothing stays
    /// outstanding afterwards, so a repeated delivery is stale.
    pub fn settle(&mut self, ticket: Ticket) {
        if self.is_current(ticket) {
            self.latest = None;
        }
    }

    /// Whether a request was issued and neither settled nor invalidated.
    pub fn is_pending(&self) -> bool {
        self.latest.is_some()
    }

    pub fn latest(&self) -> Option<Ticket> {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_issued_wins() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_invalidate_makes_everything_stale() {
        let mut seq = RequestSequence::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(ticket));
        assert_eq!(seq.latest(), None);

        let next = seq.issue();
        assert_ne!(next, ticket);
    }

    #[test]
    fn test_settle_clears_pending() {
        let mut seq = RequestSequence::new();
        assert!(!seq.is_pending());

        let old = seq.issue();
        let current = seq.issue();
        seq.settle(old);
        assert!(seq.is_pending());

        seq.settle(current);
        assert!(!seq.is_pending());
        assert!(!seq.is_current(current));
    }
}
