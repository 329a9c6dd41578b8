//! # StreamSource: per-subscriber entry point into the facility.
//!
//! [`StreamSource`] is a factory: each [`subscribe`](StreamSource::subscribe)
//! call builds one [`Bridge`](super::bridge::Bridge), registers it with the
//! facility at the requested filter, and hands it back as an opaque
//! [`SubscriptionRef`]. The resulting stream is:
//!
//! - **cold**: a subscriber only sees records dispatched after it subscribed;
//! - **multicast**: any number of independent subscriptions may coexist, each
//!   with its own filter, each cancellable without affecting the others;
//! - **unbounded**: no demand negotiation and no buffering; records are pushed
//!   as fast as the facility dispatches them.
//!
//! ## Architecture
//! ```text
//! consumer ── subscribe(filter, subscriber) ──► StreamSource
//!                                                   │ creates + registers
//!                                                   ▼
//! facility ── on_record (any thread) ───────────► Bridge ──► subscriber
//!                                                   ▲
//! consumer ── cancel() ─────────────────────────────┘
//! ```
//!
//! The source itself holds only a weak reference to the facility, so an idle
//! source never keeps a torn-down facility alive.

use std::sync::{Arc, Weak};

use crate::error::FacilityError;
use crate::facility::{self, Facility};
use crate::records::LevelFilter;
use crate::subscribers::RecordStream;

use super::bridge::Bridge;
use super::subscriber::Subscriber;
use super::subscription::SubscriptionRef;

/// Factory for independent, cancellable record subscriptions.
#[derive(Clone)]
pub struct StreamSource {
    facility: Weak<Facility>,
}

impl StreamSource {
    /// Creates a source over the given facility.
    #[must_use]
    pub fn new(facility: &Arc<Facility>) -> Self {
        Self {
            facility: Arc::downgrade(facility),
        }
    }

    /// Creates a source over the process-wide facility.
    pub fn from_installed() -> Result<Self, FacilityError> {
        Ok(Self::new(&facility::installed()?))
    }

    /// Subscribes `subscriber` at `filter` and returns its cancellation handle.
    ///
    /// Never blocks and never fails: registration on the facility is total, and
    /// if the facility has already been torn down the bridge is simply never
    /// registered: it delivers nothing and its `cancel()` stays a safe no-op.
    /// Exactly one observer registration is made per call; cancelling one
    /// subscription never affects another.
    pub fn subscribe(&self, filter: LevelFilter, subscriber: Arc<dyn Subscriber>) -> SubscriptionRef {
        let bridge = Bridge::new(subscriber, self.facility.clone());
        if let Some(facility) = self.facility.upgrade() {
            facility.add_observer(bridge.clone(), filter);
        }
        bridge
    }

    /// Subscribes a channel-backed consumer and returns it as an async stream.
    ///
    /// Convenience over [`subscribe`](Self::subscribe); see [`RecordStream`].
    #[must_use]
    pub fn stream(&self, filter: LevelFilter) -> RecordStream {
        RecordStream::attach(self, filter)
    }
}
