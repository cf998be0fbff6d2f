//! Debounce timer for suggestion lookups
//!
//! Holds at most one pending query. Scheduling always cancels whatever was
//! pending, so only the most recently scheduled query can ever fire.

use std::time::{Duration, Instant};

/// A query waiting for the quiet period to elapse
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingQuery {
    query: String,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<PendingQuery>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Replace any pending query with `query`, due `delay` after `now`
    ///
    /// The query is captured here; later edits to the input do not change
    /// what fires.
    pub fn schedule(&mut self, query: String, now: Instant) {
        if let Some(previous) = self.pending.take() {
            log::trace!("Debounce: replacing pending query {:?}", previous.query);
        }
        self.pending = Some(PendingQuery {
            query,
            deadline: now + self.delay,
        });
    }

    /// Drop the pending query, returning whether one existed
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the pending query if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
