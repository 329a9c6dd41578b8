//! # Subscriber contract for the pull side.
//!
//! A [`Subscriber`] is the single consumer behind one subscription. The bridge
//! forwards every record its registration accepted, unmodified and in dispatch
//! order, until the subscription is cancelled.
//!
//! ## Contract
//! - `on_record` runs synchronously on whichever thread the facility dispatched
//!   from; it may be invoked from several threads over the subscription's life.
//! - Delivery is unbounded: there is no demand negotiation and no buffering in
//!   the core. Subscribers that need pacing should hand records to their own
//!   queue (see [`RecordStream`](crate::RecordStream) and
//!   [`DrainWorker`](crate::DrainWorker)).
//! - The forwarding channel cannot fail: `on_record` returns nothing and the
//!   core never interprets subscriber behavior as an error.

use std::sync::Arc;

use crate::records::LogRecord;

/// Contract for stream subscribers.
///
/// Called synchronously from the facility's dispatching thread via the bridge.
pub trait Subscriber: Send + Sync + 'static {
    /// Handle one record accepted by this subscription's filter.
    fn on_record(&self, record: LogRecord);

    /// Human-readable name (for diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Function-backed subscriber implementation.
///
/// Wraps a closure so quick consumers don't need a named type.
///
/// ## Example
/// ```rust
/// use logtap::{Subscriber, SubscriberFn};
///
/// let sub = SubscriberFn::arc("printer", |rec| {
///     let _ = rec; // println!("{}", rec.message);
/// });
/// assert_eq!(sub.name(), "printer");
/// ```
pub struct SubscriberFn<F> {
    name: &'static str,
    f: F,
}

impl<F> SubscriberFn<F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscriberFn::arc`] when you immediately need an
    /// `Arc<dyn Subscriber>`.
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: &'static str, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> Subscriber for SubscriberFn<F>
where
    F: Fn(LogRecord) + Send + Sync + 'static,
{
    fn on_record(&self, record: LogRecord) {
        (self.f)(record);
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Level;
    use std::sync::Mutex;

    #[test]
    fn test_closure_receives_record() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let sub = SubscriberFn::new("collector", move |rec: LogRecord| {
            sink.lock().unwrap().push(rec.message.to_string());
        });

        sub.on_record(LogRecord::new(Level::Info, "hello"));

        assert_eq!(seen.lock().unwrap().as_slice(), ["hello".to_string()]);
        assert_eq!(sub.name(), "collector");
    }
}
