//! # Observer contract for facility push targets.
//!
//! An [`Observer`] is anything the [`Facility`](super::Facility) can push
//! records into. Observers register together with a
//! [`LevelFilter`](crate::LevelFilter); the facility applies the filter before
//! invoking the observer, so `on_record` only ever sees records that already
//! passed the registration's minimum severity.
//!
//! ## Contract
//! - `on_record` may be called from **any** thread, concurrently with calls on
//!   other observers and with registry mutation for other ids.
//! - Implementations must not block the dispatching thread for long; dispatch
//!   is synchronous and inline with the log call site.
//! - Each observer carries a unique [`ObserverId`] so the facility can target
//!   removal precisely even when many observers are registered concurrently.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::records::LogRecord;

/// Global counter backing [`ObserverId::next`].
static OBSERVER_SEQ: AtomicU64 = AtomicU64::new(0);

/// Unique identity of one registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    /// Allocates a fresh, process-unique id.
    #[must_use]
    pub fn next() -> Self {
        Self(OBSERVER_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Contract for facility push targets.
///
/// Called synchronously from whichever thread invoked
/// [`Facility::log`](super::Facility::log).
pub trait Observer: Send + Sync + 'static {
    /// Unique identity of this observer, stable for its whole lifetime.
    fn id(&self) -> ObserverId;

    /// Handle a single record that passed this registration's filter.
    ///
    /// # Parameters
    /// - `record`: Reference to the record (does not transfer ownership)
    fn on_record(&self, record: &LogRecord);

    /// Human-readable name (for diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ObserverId::next();
        let b = ObserverId::next();
        assert_ne!(a, b);
    }
}
