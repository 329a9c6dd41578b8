//! # logtap
//!
//! **Logtap** bridges a push-style, multi-observer logging facility into
//! independent, cancellable per-subscriber record streams.
//!
//! The facility broadcasts every [`LogRecord`] synchronously to its registered
//! observers, from whichever thread emitted it. The stream side wants the
//! opposite shape: a cold source each consumer subscribes to on its own terms,
//! filters by severity, and cancels without touching anyone else. The bridge
//! in the middle reconciles the two lifecycles without leaking registrations
//! and without racing on cancellation.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   Log call sites (any thread)
//!     facility.warning("...") ── facility.log(record) ── facility.error("...")
//!            │                        │                        │
//!            ▼                        ▼                        ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Facility (observer registry)                                     │
//! │  - registrations keyed by ObserverId, each with a LevelFilter     │
//! │  - synchronous multicast: filter, then Observer::on_record        │
//! └──────┬─────────────────────┬─────────────────────┬────────────────┘
//!        ▼                     ▼                     ▼
//!   ┌──────────┐          ┌──────────┐          ┌──────────┐
//!   │ Bridge 1 │          │ Bridge 2 │          │ Bridge N │   (one per
//!   │ observer │          │ observer │          │ observer │  subscription,
//!   │    +     │          │    +     │          │    +     │   created by
//!   │  handle  │          │  handle  │          │  handle  │  StreamSource)
//!   └────┬─────┘          └────┬─────┘          └────┬─────┘
//!        ▼                     ▼                     ▼
//!   Subscriber 1          RecordStream           DrainWorker
//!   (sync callback)       (futures::Stream)      (async Drain task)
//! ```
//!
//! ### Subscription lifecycle
//! ```text
//! StreamSource::subscribe(filter, subscriber)
//!   ├─► Bridge::new(subscriber, Weak<Facility>)     slot populated: Active
//!   ├─► facility.add_observer(bridge, filter)       registered
//!   └─► returns SubscriptionRef (the same bridge, as an opaque handle)
//!
//! while Active:
//!   facility dispatch (any thread) ─► bridge.on_record ─► subscriber
//!
//! handle.cancel()  (idempotent, any thread)
//!   ├─► slot cleared exactly once                   no forwarding begins after
//!   ├─► facility.remove_observer(id)                via Weak: gone ⇒ no-op
//!   └─► cancellation token fires                    Cancelled (terminal)
//! ```
//!
//! ## Design constants
//! - **Unbounded push**: no demand negotiation and no buffering in the core.
//!   [`Subscription::request`] is accepted and ignored; pacing belongs to
//!   downstream queues ([`RecordStream`], [`DrainWorker`]).
//! - **Upstream filtering**: each registration's [`LevelFilter`] is applied by
//!   the facility before the bridge runs; bridges forward unmodified.
//! - **Total operations**: nothing in the core fails. Cancelling twice,
//!   delivering after cancel, and deregistering from a facility that is
//!   already gone are all defined as silent no-ops.
//! - **Accepted race**: cancellation clears the subscriber slot before
//!   deregistering, so one in-flight delivery may still complete, and one
//!   just-dispatched record may be dropped. No happens-before edge is promised
//!   between cancellation and the last delivery.
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                          |
//! |-------------------|----------------------------------------------------------|---------------------------------------------|
//! | **Records**       | Immutable log events with severity and global sequence.  | [`LogRecord`], [`Level`]                    |
//! | **Facility**      | Observer registry with synchronous filtered multicast.   | [`Facility`], [`Observer`]                  |
//! | **Subscriptions** | Cold, multicast, cancellable per-subscriber streams.     | [`StreamSource`], [`Subscription`]          |
//! | **Consumers**     | Sync callbacks, async streams, worker-driven drains.     | [`Subscriber`], [`RecordStream`], [`Drain`] |
//! | **Ambient**       | Explicit install/teardown of the process-wide facility.  | [`install`], [`uninstall`]                  |
//!
//! ## Optional features
//! - `console`: exports a simple built-in [`ConsoleWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use futures::StreamExt;
//! use logtap::{Facility, LevelFilter, LogRecord, StreamSource, SubscriberFn, Subscription};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let facility = Facility::new();
//!     let source = StreamSource::new(&facility);
//!
//!     // Sync subscriber: called inline on the logging thread.
//!     let errors = source.subscribe(
//!         LevelFilter::Error,
//!         SubscriberFn::arc("alerts", |rec: LogRecord| {
//!             eprintln!("ALERT: {}", rec.message);
//!         }),
//!     );
//!
//!     // Async consumer: records as a stream.
//!     let mut warnings = source.stream(LevelFilter::Warning);
//!
//!     facility.debug("not delivered to either");
//!     facility.error("delivered to both");
//!
//!     let rec = warnings.next().await.unwrap();
//!     assert_eq!(&*rec.message, "delivered to both");
//!
//!     errors.cancel();
//!     facility.error("alerts no longer sees this");
//! }
//! ```

mod error;
mod facility;
mod records;
mod stream;
mod subscribers;

// ---- Public re-exports ----

pub use error::FacilityError;
pub use facility::{install, installed, uninstall, Facility, Observer, ObserverId};
pub use records::{Level, LevelFilter, LogRecord};
pub use stream::{StreamSource, Subscriber, SubscriberFn, Subscription, SubscriptionRef};
pub use subscribers::{Drain, DrainWorker, RecordStream};

// Optional: expose a simple built-in console subscriber (demo/reference).
// Enable with: `--features console`
#[cfg(feature = "console")]
pub use subscribers::ConsoleWriter;
