//! # Bridge: one observer, one subscriber, one cancellable handle.
//!
//! [`Bridge`] is the adapter at the heart of the crate. A single instance plays
//! both roles at once:
//!
//! - **[`Observer`]**: the facility pushes every record that passed the
//!   subscription's filter into [`Bridge::on_record`], from any thread;
//! - **[`Subscription`]**: the stream consumer holds the same instance as an
//!   opaque handle and may cancel it at any time, from any thread.
//!
//! ## State machine
//! ```text
//! Active ──── cancel() / facility teardown ────► Cancelled (terminal)
//!
//! Active:    slot populated, registered with the facility, records forwarded
//! Cancelled: slot empty, deregistration issued (or moot), records ignored
//! ```
//! The slot is cleared exactly once and never repopulates.
//!
//! ## Cancellation race
//! `on_record` clones the subscriber out of the slot under the lock, releases
//! the lock, then forwards. `cancel` takes the slot under the same lock. So no
//! forward *begins* after the slot clears, while a forward that already began
//! may still complete concurrently with cancellation. The converse window also
//! exists: a record the facility dispatched just before cancellation may find
//! the slot already empty and drop silently. Both outcomes are accepted; the
//! core does not promise a happens-before edge between cancellation and the
//! last in-flight delivery.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use tokio_util::sync::CancellationToken;

use crate::facility::{Facility, Observer, ObserverId};
use crate::records::LogRecord;

use super::subscriber::Subscriber;
use super::subscription::Subscription;

/// Dual-role adapter between one facility registration and one subscriber.
pub(crate) struct Bridge {
    /// Identity under which this bridge is registered with the facility.
    id: ObserverId,
    /// The one subscriber served by this bridge; `None` once cancelled.
    slot: Mutex<Option<Arc<dyn Subscriber>>>,
    /// Non-owning back-reference, used only to deregister on teardown.
    facility: Weak<Facility>,
    /// Cancelled together with the slot; lets async consumers await teardown.
    token: CancellationToken,
}

impl Bridge {
    /// Creates an active bridge bound to `subscriber`.
    ///
    /// The caller (the stream source) is responsible for registering the
    /// returned bridge with the facility.
    pub(crate) fn new(subscriber: Arc<dyn Subscriber>, facility: Weak<Facility>) -> Arc<Self> {
        Arc::new(Self {
            id: ObserverId::next(),
            slot: Mutex::new(Some(subscriber)),
            facility,
            token: CancellationToken::new(),
        })
    }
}

impl Observer for Bridge {
    fn id(&self) -> ObserverId {
        self.id
    }

    /// Forwards `record` to the subscriber, unmodified, iff the slot is still
    /// populated. Empty slot (already cancelled) is a silent no-op.
    fn on_record(&self, record: &LogRecord) {
        // Clone out and release the lock before forwarding: cancel() must never
        // block on a slow subscriber, and a panicking subscriber must not
        // poison the slot.
        let target = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(subscriber) = target {
            subscriber.on_record(record.clone());
        }
    }

    fn name(&self) -> &'static str {
        "logtap::bridge"
    }
}

impl Subscription for Bridge {
    fn cancel(&self) {
        let taken = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        // Only the call that actually emptied the slot deregisters; repeated
        // cancels and cancels after facility teardown fall through to no-ops.
        if taken.is_some() {
            if let Some(facility) = self.facility.upgrade() {
                facility.remove_observer(self.id);
            }
            self.token.cancel();
        }
    }

    fn request(&self, _demand: u64) {
        // Unbounded by design: demand is accepted and ignored.
    }

    fn is_active(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Level, LevelFilter};
    use crate::stream::subscriber::SubscriberFn;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_subscriber() -> (Arc<AtomicUsize>, Arc<dyn Subscriber>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let sub = SubscriberFn::arc("counter", move |_rec| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (count, sub)
    }

    #[test]
    fn test_forwards_while_active_then_stops() {
        let facility = Facility::new();
        let (count, sub) = counting_subscriber();
        let bridge = Bridge::new(sub, Arc::downgrade(&facility));
        facility.add_observer(bridge.clone(), LevelFilter::All);

        facility.info("one");
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(bridge.is_active());

        bridge.cancel();
        facility.info("two");

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!bridge.is_active());
        assert_eq!(facility.observer_count(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let facility = Facility::new();
        let (_, sub) = counting_subscriber();
        let bridge = Bridge::new(sub, Arc::downgrade(&facility));
        facility.add_observer(bridge.clone(), LevelFilter::All);

        bridge.cancel();
        bridge.cancel();
        bridge.cancel();

        assert!(!bridge.is_active());
        assert_eq!(facility.observer_count(), 0);
    }

    #[test]
    fn test_cancel_after_facility_gone_is_noop() {
        let facility = Facility::new();
        let (_, sub) = counting_subscriber();
        let bridge = Bridge::new(sub, Arc::downgrade(&facility));
        facility.add_observer(bridge.clone(), LevelFilter::All);

        facility.remove_all();
        drop(facility);

        bridge.cancel();
        assert!(!bridge.is_active());
    }

    #[test]
    fn test_on_record_after_cancel_is_silent() {
        let facility = Facility::new();
        let (count, sub) = counting_subscriber();
        let bridge = Bridge::new(sub, Arc::downgrade(&facility));

        bridge.cancel();
        bridge.on_record(&LogRecord::new(Level::Error, "late"));

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_request_is_ignored_delivery_proceeds() {
        let facility = Facility::new();
        let (count, sub) = counting_subscriber();
        let bridge = Bridge::new(sub, Arc::downgrade(&facility));
        facility.add_observer(bridge.clone(), LevelFilter::All);

        // No demand signalled at all; records still flow.
        facility.info("a");
        bridge.request(0);
        facility.info("b");
        bridge.request(u64::MAX);
        facility.info("c");

        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(bridge.is_active());
    }

    #[test]
    fn test_token_fires_on_cancel() {
        let facility = Facility::new();
        let (_, sub) = counting_subscriber();
        let bridge = Bridge::new(sub, Arc::downgrade(&facility));
        let token = bridge.cancellation_token();

        assert!(!token.is_cancelled());
        bridge.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_concurrent_delivery_and_cancel_is_safe_and_final() {
        // In-flight forwards may legitimately overlap the cancel call itself
        // (accepted race), so the assertion is made after both threads have
        // joined: the slot is empty, and pushes from that point on are never
        // delivered.
        for _ in 0..50 {
            let facility = Facility::new();
            let (count, sub) = counting_subscriber();
            let bridge = Bridge::new(sub, Arc::downgrade(&facility));
            facility.add_observer(bridge.clone(), LevelFilter::All);

            let pusher = {
                let f = Arc::clone(&facility);
                std::thread::spawn(move || {
                    for i in 0..200 {
                        f.info(format!("r{i}"));
                    }
                })
            };
            let canceller = {
                let b = Arc::clone(&bridge);
                std::thread::spawn(move || b.cancel())
            };

            pusher.join().unwrap();
            canceller.join().unwrap();

            assert!(!bridge.is_active());
            let settled = count.load(Ordering::SeqCst);
            assert!(settled <= 200);

            for _ in 0..20 {
                facility.info("after-settle");
            }
            assert_eq!(count.load(Ordering::SeqCst), settled);
        }
    }
}
