//! Per-view staleness guard.

/// Monotonic counter owned by a view instance. Every fetch captures a
/// [`Ticket`] at dispatch; the result is applied only while that ticket is
/// still current, so a superseded or closed view never shows stale data.
#[derive(Debug, Default)]
pub struct Generation(u64);

/// The generation value captured when a fetch was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    pub fn new() -> Self {
        Self(0)
    }

    /// Invalidates all outstanding tickets and issues a fresh one.
    pub fn advance(&mut self) -> Ticket {
        self.0 += 1;
        Ticket(self.0)
    }

    /// Invalidates all outstanding tickets without issuing a new one.
    /// Used when a view closes.
    pub fn invalidate(&mut self) {
        self.0 += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0 == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_invalidates_older_tickets() {
        let mut generation = Generation::new();
        let first = generation.advance();
        assert!(generation.is_current(first));

        let second = generation.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn invalidate_leaves_no_current_ticket() {
        let mut generation = Generation::new();
        let ticket = generation.advance();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }
}
