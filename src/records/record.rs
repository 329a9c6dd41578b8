//! # Log records dispatched through the facility.
//!
//! [`LogRecord`] is an immutable value describing one log event. Records are
//! created by whoever calls into the [`Facility`](crate::Facility) and are
//! cloned (never mutated) as they fan out to observers; `Arc`-backed fields
//! keep those clones cheap.
//!
//! ## Ordering
//! Each record carries a globally unique sequence number (`seq`) assigned at
//! construction. Within one observer the facility preserves dispatch order, but
//! `seq` lets consumers restore a global order when merging several streams.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

use super::Level;

/// Global sequence counter for record ordering.
static RECORD_SEQ: AtomicU64 = AtomicU64::new(0);

/// One immutable log event.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp
/// - `level`: severity, compared against each subscription's
///   [`LevelFilter`](crate::LevelFilter) by the facility before dispatch
#[derive(Clone, Debug)]
pub struct LogRecord {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Severity of this record.
    pub level: Level,
    /// Component or module that produced the record, if known.
    pub target: Option<Arc<str>>,
    /// The log message payload.
    pub message: Arc<str>,
}

impl LogRecord {
    /// Creates a new record with the current timestamp and next sequence number.
    pub fn new(level: Level, message: impl Into<Arc<str>>) -> Self {
        Self {
            seq: RECORD_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            level,
            target: None,
            message: message.into(),
        }
    }

    /// Attaches the name of the component that produced the record.
    #[inline]
    #[must_use]
    pub fn with_target(mut self, target: impl Into<Arc<str>>) -> Self {
        self.target = Some(target.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let a = LogRecord::new(Level::Info, "first");
        let b = LogRecord::new(Level::Info, "second");
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_builder_fields() {
        let rec = LogRecord::new(Level::Warning, "disk almost full").with_target("storage");
        assert_eq!(rec.level, Level::Warning);
        assert_eq!(rec.target.as_deref(), Some("storage"));
        assert_eq!(&*rec.message, "disk almost full");
    }

    #[test]
    fn test_clone_shares_payload() {
        let rec = LogRecord::new(Level::Debug, "payload");
        let dup = rec.clone();
        assert_eq!(rec.seq, dup.seq);
        assert!(Arc::ptr_eq(&rec.message, &dup.message));
    }
}
