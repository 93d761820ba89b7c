//! Singleton pattern: a lazily-initialized, process-wide counter.
//!
//! The counter is created on the first call to [`get_instance`] with a count
//! of [`INITIAL_COUNT`] and lives for the rest of the process. Callers only
//! ever see it through the [`Singleton`] capability, never the concrete
//! type.
//!
//! Thread safety: creation goes through a `std::sync::OnceLock` and the
//! count is an `AtomicI64`, so concurrent callers share one instance and
//! concurrent increments are never lost.
//!
//! # Example
//! ```
//! use dp_creational::singleton::get_instance;
//!
//! let first = get_instance().add_one();
//! let second = get_instance().add_one();
//! assert_eq!(second, first + 1);
//! ```
//!
//! The registry owning the counter is private, so no second counter can be
//! built from outside the crate:
//! ```compile_fail
//! let extra = dp_creational::singleton::CounterRegistry::new();
//! ```

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;

use dp_core::Count;

/// Value of `count` when the counter is first created.
pub const INITIAL_COUNT: Count = 100;

/// The capability exposed by the shared counter.
pub trait Singleton: Send + Sync {
    /// Increment the count by one and return the new value.
    fn add_one(&self) -> Count;
}

struct Counter {
    count: AtomicI64,
}

impl Counter {
    fn new(count: Count) -> Self {
        Self {
            count: AtomicI64::new(count),
        }
    }
}

impl Singleton for Counter {
    fn add_one(&self) -> Count {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Owner of at most one counter, created on demand.
///
/// Only the process-wide `static` behind [`get_instance`] is reachable from
/// outside the crate. Unit tests build their own to observe a fresh counter.
pub(crate) struct CounterRegistry {
    instance: OnceLock<Counter>,
}

impl CounterRegistry {
    pub(crate) const fn new() -> Self {
        Self {
            instance: OnceLock::new(),
        }
    }

    pub(crate) fn get_instance(&self) -> &dyn Singleton {
        self.instance.get_or_init(|| {
            tracing::debug!(initial = INITIAL_COUNT, "creating singleton counter");
            Counter::new(INITIAL_COUNT)
        })
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }
}

static REGISTRY: CounterRegistry = CounterRegistry::new();

/// Return the process-wide counter, creating it on the first call.
pub fn get_instance() -> &'static dyn Singleton {
    REGISTRY.get_instance()
}

/// Return `true` once the process-wide counter has been created.
pub fn is_initialized() -> bool {
    REGISTRY.is_initialized()
}

/// Return `true` if both references point at the same counter.
pub fn same_instance(a: &dyn Singleton, b: &dyn Singleton) -> bool {
    std::ptr::eq(
        a as *const dyn Singleton as *const u8,
        b as *const dyn Singleton as *const u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fresh_registry_starts_uninitialized() {
        let registry = CounterRegistry::new();
        assert!(!registry.is_initialized());
        registry.get_instance();
        assert!(registry.is_initialized());
    }

    #[test]
    fn first_add_one_returns_101() {
        let registry = CounterRegistry::new();
        assert_eq!(registry.get_instance().add_one(), 101);
    }

    #[test]
    fn separately_obtained_references_share_state() {
        let registry = CounterRegistry::new();
        let a = registry.get_instance();
        let b = registry.get_instance();
        let c = registry.get_instance();
        assert_eq!(a.add_one(), 101);
        assert_eq!(b.add_one(), 102);
        assert_eq!(c.add_one(), 103);
    }

    #[test]
    fn access_alone_does_not_change_count() {
        let registry = CounterRegistry::new();
        for _ in 0..10 {
            registry.get_instance();
        }
        assert_eq!(registry.get_instance().add_one(), INITIAL_COUNT + 1);
    }

    #[test]
    fn every_access_returns_same_instance() {
        let registry = CounterRegistry::new();
        let first = registry.get_instance();
        for _ in 0..100 {
            assert!(same_instance(first, registry.get_instance()));
        }
    }

    #[test]
    fn public_accessor_always_reaches_the_process_wide_counter() {
        let first = get_instance();
        assert!(is_initialized());
        assert!(same_instance(first, REGISTRY.get_instance()));

        let from_threads: Vec<&'static dyn Singleton> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(get_instance)).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for instance in from_threads {
            assert!(same_instance(first, instance));
        }
    }

    #[test]
    fn concurrent_add_one_loses_no_updates() {
        const THREADS: usize = 8;
        const CALLS: usize = 1_000;

        let registry = CounterRegistry::new();
        let mut seen: Vec<Count> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        (0..CALLS)
                            .map(|_| registry.get_instance().add_one())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let total = (THREADS * CALLS) as Count;
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len() as Count, total);
        assert_eq!(seen.first(), Some(&(INITIAL_COUNT + 1)));
        assert_eq!(seen.last(), Some(&(INITIAL_COUNT + total)));
    }

    proptest! {
        #[test]
        fn kth_add_one_returns_initial_plus_k(k in 1usize..500) {
            let registry = CounterRegistry::new();
            let mut last = INITIAL_COUNT;
            for _ in 0..k {
                let next = registry.get_instance().add_one();
                prop_assert_eq!(next, last + 1);
                last = next;
            }
            prop_assert_eq!(last, INITIAL_COUNT + k as Count);
        }
    }
}
