//! # Channel-backed consumption: records as an async stream.
//!
//! [`RecordStream`] pairs an unbounded queue with a subscription handle and
//! exposes the queue's receiving half as a [`futures::Stream`]. The sending
//! half is a private subscriber whose `on_record` enqueues without blocking the
//! facility's dispatching thread.
//!
//! ## Semantics
//! - The queue is **unbounded**: the core never applies backpressure, so a slow
//!   consumer grows the queue instead of stalling log call sites.
//! - Cancelling (or dropping) the stream tears the subscription down; records
//!   already queued are still yielded, then the stream ends with `None`.
//! - A receiver that was dropped mid-push is fine: the enqueue result is
//!   discarded, matching the core's "forwarding cannot fail" contract.

use std::pin::Pin;
use std::task::{Context, Poll};

use std::sync::Arc;

use futures::Stream;
use tokio::sync::mpsc;

use crate::records::{LevelFilter, LogRecord};
use crate::stream::{StreamSource, Subscriber, Subscription, SubscriptionRef};

/// Sending half: a subscriber that enqueues into an unbounded channel.
pub(crate) struct ChannelSubscriber {
    tx: mpsc::UnboundedSender<LogRecord>,
}

impl ChannelSubscriber {
    pub(crate) fn arc(tx: mpsc::UnboundedSender<LogRecord>) -> Arc<Self> {
        Arc::new(Self { tx })
    }
}

impl Subscriber for ChannelSubscriber {
    fn on_record(&self, record: LogRecord) {
        // Receiver gone means the consumer stopped listening; nothing to report.
        let _ = self.tx.send(record);
    }

    fn name(&self) -> &'static str {
        "logtap::channel"
    }
}

/// Async stream of records for one subscription.
///
/// Created by [`StreamSource::stream`]. Yields every record the subscription's
/// filter accepted, in dispatch order, until cancelled.
///
/// ## Example
/// ```no_run
/// use futures::StreamExt;
/// use logtap::{Facility, LevelFilter, StreamSource};
///
/// # async fn demo() {
/// let facility = Facility::new();
/// let source = StreamSource::new(&facility);
/// let mut stream = source.stream(LevelFilter::Warning);
///
/// while let Some(record) = stream.next().await {
///     println!("[{}] {}", record.level.as_label(), record.message);
/// }
/// # }
/// ```
pub struct RecordStream {
    rx: mpsc::UnboundedReceiver<LogRecord>,
    handle: SubscriptionRef,
}

impl RecordStream {
    /// Wires a channel subscriber into `source` at `filter`.
    pub(crate) fn attach(source: &StreamSource, filter: LevelFilter) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = source.subscribe(filter, ChannelSubscriber::arc(tx));
        Self { rx, handle }
    }

    /// Cancels the underlying subscription.
    ///
    /// Already-queued records are still yielded before the stream ends.
    pub fn cancel(&self) {
        self.handle.cancel();
    }

    /// True while the underlying subscription still forwards records.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_active()
    }
}

impl Stream for RecordStream {
    type Item = LogRecord;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl Drop for RecordStream {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}
