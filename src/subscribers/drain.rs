//! # Drain: async consumers on a dedicated worker task.
//!
//! A [`Drain`] is an async record handler (I/O, batching, shipping to a
//! collector) that must never run on the facility's dispatching thread. A
//! [`DrainWorker`] subscribes on the drain's behalf, enqueues records through
//! an unbounded channel, and feeds them to the drain from its own spawned task.
//!
//! ## Contract
//! - Drains may be slow; they delay only their own queue, never the facility
//!   or other subscribers.
//! - Panics inside a drain are caught and warned; the worker keeps running.
//! - [`DrainWorker::shutdown`] cancels the subscription and awaits the worker;
//!   records still queued at that point are discarded.
//!
//! ## Example (skeleton)
//! ```rust
//! // use logtap::{Drain, LogRecord};
//! //
//! // struct Shipper;
//! // #[async_trait::async_trait]
//! // impl Drain for Shipper {
//! //     async fn on_record(&self, record: &LogRecord) {
//! //         // POST to the collector...
//! //     }
//! //     fn name(&self) -> &'static str { "shipper" }
//! // }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::records::{LevelFilter, LogRecord};
use crate::stream::{StreamSource, Subscription, SubscriptionRef};

use super::channel::ChannelSubscriber;

/// Contract for async record consumers.
///
/// Called from a drain-dedicated worker task. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Drain: Send + Sync + 'static {
    /// Handle a single record for this drain.
    ///
    /// # Parameters
    /// - `record`: Reference to the record (does not transfer ownership)
    async fn on_record(&self, record: &LogRecord);

    /// Human-readable name (for diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Subscription plus worker task driving one [`Drain`].
pub struct DrainWorker {
    handle: SubscriptionRef,
    worker: JoinHandle<()>,
}

impl DrainWorker {
    /// Subscribes `drain` at `filter` and spawns its worker loop.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(source: &StreamSource, filter: LevelFilter, drain: Arc<dyn Drain>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<LogRecord>();
        let handle = source.subscribe(filter, ChannelSubscriber::arc(tx));
        let token = handle.cancellation_token();

        let worker = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    rec = rx.recv() => match rec {
                        Some(rec) => {
                            let fut = drain.on_record(&rec);
                            if let Err(panic_err) =
                                std::panic::AssertUnwindSafe(fut).catch_unwind().await
                            {
                                eprintln!(
                                    "[logtap] drain '{}' panicked: {:?}",
                                    drain.name(),
                                    panic_err
                                );
                            }
                        }
                        None => break,
                    }
                }
            }
        });

        Self { handle, worker }
    }

    /// Handle to the underlying subscription.
    #[must_use]
    pub fn subscription(&self) -> &SubscriptionRef {
        &self.handle
    }

    /// Graceful shutdown: cancel the subscription and await the worker.
    pub async fn shutdown(self) {
        self.handle.cancel();
        let _ = self.worker.await;
    }
}
