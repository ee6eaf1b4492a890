//! Generation-based debouncing
//!
//! Each call to [`Debouncer::schedule`] supersedes the previous one. The caller
//! runs [`elapsed`] for the returned ticket and hands the ticket back to
//! [`Debouncer::settle`]; only the newest ticket yields a value.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace any pending value and invalidate every earlier ticket.
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Take the pending value if `ticket` is still the newest one.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }
}

/// Resolve to `ticket` once `delay` has passed.
pub async fn elapsed(delay: Duration, ticket: Ticket) -> Ticket {
    tokio::time::sleep(delay).await;
    ticket
}
