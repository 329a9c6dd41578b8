//! # Facility: observer registry and synchronous broadcast.
//!
//! [`Facility`] accepts observer registrations scoped to a minimum severity and
//! pushes every matching record into each registered observer, inline on the
//! thread that called [`Facility::log`].
//!
//! ## Architecture
//! ```text
//! Log call sites (many threads):          Registered observers:
//!   facility.warning("...") ──┐
//!   facility.log(record)    ──┼──► filter per registration ──► Observer::on_record
//!   facility.error("...")   ──┘         (LevelFilter)           (bridges, writers, ...)
//! ```
//!
//! ## Rules
//! - **Synchronous dispatch**: `log()` returns after every matching observer ran.
//! - **Upstream filtering**: severity is compared against each registration's
//!   [`LevelFilter`] here; observers never see records below their filter.
//! - **Concurrent-safe add/remove**: registration and removal may race with
//!   dispatch from other threads. Dispatch snapshots the matching observers and
//!   releases the registry lock before invoking callbacks, so an observer may
//!   add or remove observers (itself included) from inside `on_record`.
//! - **Targeted removal**: observers are keyed by [`ObserverId`]; removing an
//!   id that is not registered is a no-op.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::records::{Level, LevelFilter, LogRecord};

use super::observer::{Observer, ObserverId};

/// One registration: the push target plus its minimum-severity gate.
struct Registered {
    observer: Arc<dyn Observer>,
    filter: LevelFilter,
}

/// Observer registry with synchronous multicast dispatch.
///
/// Shared across all bridges and log call sites; cheap to share via `Arc`.
pub struct Facility {
    observers: RwLock<HashMap<ObserverId, Registered>>,
}

impl Facility {
    /// Creates a new, empty facility.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            observers: RwLock::new(HashMap::new()),
        })
    }

    /// Registers a push target filtered at a minimum severity.
    ///
    /// Re-adding an id that is already registered replaces its filter.
    pub fn add_observer(&self, observer: Arc<dyn Observer>, filter: LevelFilter) {
        let id = observer.id();
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        observers.insert(id, Registered { observer, filter });
    }

    /// Deregisters an observer; no-op when `id` is not currently registered.
    pub fn remove_observer(&self, id: ObserverId) {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        observers.remove(&id);
    }

    /// Drops every registration. Used on facility teardown.
    pub fn remove_all(&self) {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        observers.clear();
    }

    /// Number of currently registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Pushes one record to every observer whose filter accepts its level.
    ///
    /// Callable from any number of threads concurrently. The registry lock is
    /// released before callbacks run; removal during dispatch does not deadlock,
    /// and a removal racing with an in-flight dispatch may still see this record
    /// delivered once.
    pub fn log(&self, record: LogRecord) {
        let targets: Vec<Arc<dyn Observer>> = {
            let observers = self
                .observers
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            observers
                .values()
                .filter(|r| r.filter.accepts(record.level))
                .map(|r| Arc::clone(&r.observer))
                .collect()
        };
        for observer in targets {
            observer.on_record(&record);
        }
    }

    /// Dispatches an `Error` record with the given message.
    #[inline]
    pub fn error(&self, message: impl Into<Arc<str>>) {
        self.log(LogRecord::new(Level::Error, message));
    }

    /// Dispatches a `Warning` record with the given message.
    #[inline]
    pub fn warning(&self, message: impl Into<Arc<str>>) {
        self.log(LogRecord::new(Level::Warning, message));
    }

    /// Dispatches an `Info` record with the given message.
    #[inline]
    pub fn info(&self, message: impl Into<Arc<str>>) {
        self.log(LogRecord::new(Level::Info, message));
    }

    /// Dispatches a `Debug` record with the given message.
    #[inline]
    pub fn debug(&self, message: impl Into<Arc<str>>) {
        self.log(LogRecord::new(Level::Debug, message));
    }

    /// Dispatches a `Verbose` record with the given message.
    #[inline]
    pub fn verbose(&self, message: impl Into<Arc<str>>) {
        self.log(LogRecord::new(Level::Verbose, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct Recorder {
        id: ObserverId,
        seen: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                id: ObserverId::next(),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Observer for Recorder {
        fn id(&self) -> ObserverId {
            self.id
        }

        fn on_record(&self, record: &LogRecord) {
            self.seen.lock().unwrap().push(record.message.to_string());
        }
    }

    #[test]
    fn test_dispatch_respects_registration_filter() {
        let facility = Facility::new();
        let rec = Recorder::new();
        facility.add_observer(rec.clone(), LevelFilter::Warning);

        facility.debug("dropped");
        facility.warning("kept-1");
        facility.error("kept-2");

        assert_eq!(rec.seen(), vec!["kept-1".to_string(), "kept-2".to_string()]);
    }

    #[test]
    fn test_remove_observer_stops_delivery() {
        let facility = Facility::new();
        let rec = Recorder::new();
        facility.add_observer(rec.clone(), LevelFilter::All);

        facility.info("before");
        facility.remove_observer(rec.id());
        facility.info("after");

        assert_eq!(rec.seen(), vec!["before".to_string()]);
        assert_eq!(facility.observer_count(), 0);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let facility = Facility::new();
        facility.remove_observer(ObserverId::next());
        assert_eq!(facility.observer_count(), 0);
    }

    #[test]
    fn test_readd_replaces_filter() {
        let facility = Facility::new();
        let rec = Recorder::new();
        facility.add_observer(rec.clone(), LevelFilter::Error);
        facility.add_observer(rec.clone(), LevelFilter::All);

        facility.debug("now visible");

        assert_eq!(facility.observer_count(), 1);
        assert_eq!(rec.seen(), vec!["now visible".to_string()]);
    }

    #[test]
    fn test_observer_may_remove_itself_during_dispatch() {
        struct SelfRemover {
            id: ObserverId,
            facility: std::sync::Weak<Facility>,
            calls: AtomicUsize,
        }

        impl Observer for SelfRemover {
            fn id(&self) -> ObserverId {
                self.id
            }

            fn on_record(&self, _record: &LogRecord) {
                self.calls.fetch_add(1, Ordering::SeqCst);
                if let Some(f) = self.facility.upgrade() {
                    f.remove_observer(self.id);
                }
            }
        }

        let facility = Facility::new();
        let obs = Arc::new(SelfRemover {
            id: ObserverId::next(),
            facility: Arc::downgrade(&facility),
            calls: AtomicUsize::new(0),
        });
        facility.add_observer(obs.clone(), LevelFilter::All);

        facility.info("first");
        facility.info("second");

        assert_eq!(obs.calls.load(Ordering::SeqCst), 1);
        assert_eq!(facility.observer_count(), 0);
    }

    #[test]
    fn test_concurrent_dispatch_does_not_lose_records() {
        let facility = Facility::new();
        let rec = Recorder::new();
        facility.add_observer(rec.clone(), LevelFilter::All);

        let threads: Vec<_> = (0..4)
            .map(|t| {
                let f = Arc::clone(&facility);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        f.info(format!("t{t}-{i}"));
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        assert_eq!(rec.seen().len(), 200);
    }
}
