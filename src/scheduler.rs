//! Deferred actions driven by the event loop
//!
//! Nothing here owns a thread or a timer. A deferred action is a payload and a
//! deadline; the event loop passes the current [`Instant`] to `poll` on every
//! iteration and gets the payload back once the deadline has passed. Tests
//! drive the same code by handing in instants of their own.

use std::time::{Duration, Instant};

/// A payload waiting for its deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred<T> {
    deadline: Instant,
    payload: T,
}

impl<T> Deferred<T> {
    pub fn new(payload: T, now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            payload,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// Holds at most one pending action; scheduling a new one cancels the old.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    pending: Option<Deferred<T>>,
    generation: u64,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending action with `payload`, due `delay` after `now`.
    ///
    /// Returns the generation number of the new action.
    pub fn schedule(&mut self, payload: T, now: Instant, delay: Duration) -> u64 {
        self.generation += 1;
        self.pending = Some(Deferred::new(payload, now, delay));
        self.generation
    }

    /// Drop the pending action. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending payload if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|d| d.is_due(now)) {
            self.pending.take().map(Deferred::into_payload)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn test_not_due_before_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule("a", start, DELAY);
        assert_eq!(debouncer.poll(start + Duration::from_millis(999)), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule("a", start, DELAY);
        assert_eq!(debouncer.poll(start + DELAY), Some("a"));
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        assert_eq!(debouncer.schedule("a", start, DELAY), 1);
        let later = start + Duration::from_millis(600);
        assert_eq!(debouncer.schedule("ab", later, DELAY), 2);

        // The first deadline passes without firing
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(debouncer.poll(later + DELAY), Some("ab"));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.cancel());
        debouncer.schedule(1, start, DELAY);
        assert!(debouncer.cancel());
        assert_eq!(debouncer.poll(start + DELAY), None);
    }

    #[test]
    fn test_zero_delay_is_due_immediately() {
        let start = Instant::now();
        let deferred = Deferred::new((), start, Duration::ZERO);
        assert!(deferred.is_due(start));
    }
}
