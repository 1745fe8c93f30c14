//! Trailing-edge debouncer with an injected clock.
//!
//! `trigger` records the latest value and pushes the deadline out;
//! `poll` hands the value back once the quiet window has elapsed since
//! the last trigger.

use std::time::{Duration, Instant};

pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    deadline: Option<Instant>,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn trigger(&mut self, now: Instant, value: T) {
        self.deadline = Some(now + self.wait);
        self.pending = Some(value);
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Time left before the pending value becomes due; `None` when idle.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_fires_once_after_last_event() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(200));
        let mut fired = Vec::new();

        for (i, offset) in [0u64, 50, 120, 250, 400].into_iter().enumerate() {
            let now = start + ms(offset);
            if let Some(v) = debouncer.poll(now) {
                fired.push(v);
            }
            debouncer.trigger(now, i);
        }

        // Nothing until 200 ms after the last trigger at t=400.
        assert_eq!(debouncer.poll(start + ms(599)), None);
        if let Some(v) = debouncer.poll(start + ms(600)) {
            fired.push(v);
        }
        assert_eq!(fired, vec![4]);
        assert_eq!(debouncer.poll(start + ms(1000)), None);
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(200));

        debouncer.trigger(start, "a");
        assert_eq!(debouncer.poll(start + ms(200)), Some("a"));

        debouncer.trigger(start + ms(500), "b");
        assert_eq!(debouncer.time_until_due(start + ms(550)), Some(ms(150)));
        assert_eq!(debouncer.poll(start + ms(700)), Some("b"));
    }

    #[test]
    fn test_idle_debouncer() {
        let mut debouncer: Debouncer<()> = Debouncer::default();
        assert_eq!(debouncer.wait(), RESIZE_DEBOUNCE);
        assert_eq!(debouncer.time_until_due(Instant::now()), None);
        assert_eq!(debouncer.poll(Instant::now()), None);
    }
}
