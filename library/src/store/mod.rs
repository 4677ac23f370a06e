//! In-memory resource stores with simulated mutation latency.
//!
//! Mutations do not apply immediately: each one is queued with a deadline
//! derived from the active [`Latency`] profile, and [`ResourceStore::poll`]
//! applies every command whose deadline has passed. The UI polls once per
//! frame, so writes land a beat after the user triggers them, the way a
//! real backend round-trip would. Tests inject a [`Clock`] they control and
//! the [`Latency::ZERO`] profile to make everything synchronous.

pub mod platform;

use std::time::{Duration, Instant};

/// Time source for the store layer. Injected so tests can advance time
/// manually instead of sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// How long each class of mutation takes to settle. Reads are served from
/// the settled collection immediately.
#[derive(Clone, Copy, Debug)]
pub struct Latency {
    pub create: Duration,
    pub mutate: Duration,
}

impl Latency {
    /// Everything settles on the next poll. For tests.
    pub const ZERO: Latency = Latency {
        create: Duration::ZERO,
        mutate: Duration::ZERO,
    };

    /// Round-trip times that feel like a real backend.
    pub fn simulated() -> Self {
        Self {
            create: Duration::from_millis(600),
            mutate: Duration::from_millis(400),
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

type Command<T> = Box<dyn FnOnce(&mut Vec<T>) + Send>;

struct Deferred<T> {
    ready_at: Instant,
    apply: Command<T>,
}

/// One resource collection plus its queue of not-yet-settled mutations.
///
/// Commands apply in deadline order; two commands with equal deadlines keep
/// their submission order, so the later write wins.
pub struct ResourceStore<T> {
    items: Vec<T>,
    deferred: Vec<Deferred<T>>,
}

impl<T> ResourceStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            deferred: Vec::new(),
        }
    }

    /// The settled items. Queued mutations are invisible until they apply.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of mutations still in flight.
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    /// Queue a mutation to apply once `delay` has elapsed.
    pub fn defer(
        &mut self,
        now: Instant,
        delay: Duration,
        apply: impl FnOnce(&mut Vec<T>) + Send + 'static,
    ) {
        self.deferred.push(Deferred {
            ready_at: now + delay,
            apply: Box::new(apply),
        });
    }

    /// Apply every queued mutation whose deadline has passed. Returns the
    /// number applied so callers can request a repaint.
    pub fn poll(&mut self, now: Instant) -> usize {
        if self.deferred.is_empty() {
            return 0;
        }
        // Stable sort keeps submission order for equal deadlines.
        self.deferred.sort_by_key(|d| d.ready_at);
        let ready = self.deferred.iter().take_while(|d| d.ready_at <= now).count();
        for cmd in self.deferred.drain(..ready) {
            (cmd.apply)(&mut self.items);
        }
        if ready > 0 {
            log::debug!("applied {ready} deferred store command(s)");
        }
        ready
    }

    /// Drop queued mutations and replace the settled items.
    pub fn reset(&mut self, items: Vec<T>) {
        self.deferred.clear();
        self.items = items;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Clock;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// A clock that only moves when told to.
    pub struct ManualClock {
        now: Mutex<Instant>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self {
                now: Mutex::new(Instant::now()),
            }
        }

        pub fn advance(&self, by: Duration) {
            *self.now.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.now.lock().unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::ManualClock;
    use super::*;

    #[test]
    fn deferred_command_waits_for_its_deadline() {
        let clock = ManualClock::new();
        let mut store = ResourceStore::new(vec![1]);
        store.defer(clock.now(), Duration::from_millis(400), |items| {
            items.push(2)
        });

        assert_eq!(store.poll(clock.now()), 0);
        assert_eq!(store.items(), &[1]);
        assert_eq!(store.pending(), 1);

        clock.advance(Duration::from_millis(400));
        assert_eq!(store.poll(clock.now()), 1);
        assert_eq!(store.items(), &[1, 2]);
        assert_eq!(store.pending(), 0);
    }

    #[test]
    fn zero_latency_applies_on_next_poll() {
        let clock = ManualClock::new();
        let mut store = ResourceStore::new(Vec::new());
        store.defer(clock.now(), Duration::ZERO, |items| items.push("a"));
        assert_eq!(store.poll(clock.now()), 1);
        assert_eq!(store.items(), &["a"]);
    }

    #[test]
    fn commands_apply_in_deadline_order() {
        let clock = ManualClock::new();
        let mut store = ResourceStore::new(vec![0u32]);
        // Queued first but due later.
        store.defer(clock.now(), Duration::from_millis(600), |items| {
            items[0] = 600
        });
        store.defer(clock.now(), Duration::from_millis(400), |items| {
            items[0] = 400
        });

        clock.advance(Duration::from_secs(1));
        assert_eq!(store.poll(clock.now()), 2);
        assert_eq!(store.items(), &[600]);
    }

    #[test]
    fn equal_deadlines_keep_submission_order() {
        let clock = ManualClock::new();
        let mut store = ResourceStore::new(vec![0u32]);
        store.defer(clock.now(), Duration::from_millis(400), |items| {
            items[0] = 1
        });
        store.defer(clock.now(), Duration::from_millis(400), |items| {
            items[0] = 2
        });

        clock.advance(Duration::from_millis(400));
        store.poll(clock.now());
        assert_eq!(store.items(), &[2]);
    }

    #[test]
    fn reset_discards_pending_commands() {
        let clock = ManualClock::new();
        let mut store = ResourceStore::new(vec![1]);
        store.defer(clock.now(), Duration::ZERO, |items| items.push(2));
        store.reset(vec![9]);

        clock.advance(Duration::from_secs(1));
        assert_eq!(store.poll(clock.now()), 0);
        assert_eq!(store.items(), &[9]);
    }
}
