//! # Subscription handle contract.
//!
//! Each call to [`StreamSource::subscribe`](crate::StreamSource::subscribe)
//! returns a [`SubscriptionRef`]: an opaque, shareable handle the consumer uses
//! to tear the subscription down. The concrete type behind it is the bridge,
//! which also serves as the facility-side observer; consumers only ever see
//! this trait.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Shared handle to an active subscription.
pub type SubscriptionRef = Arc<dyn Subscription>;

/// Contract for cancellable subscription handles.
pub trait Subscription: Send + Sync + 'static {
    /// Cancels the subscription.
    ///
    /// Idempotent: the first call stops forwarding and deregisters the
    /// underlying observer from the facility; every later call is a no-op.
    /// Safe to call after the facility itself is already gone.
    fn cancel(&self);

    /// Signals demand from the consumer. **Accepted and ignored.**
    ///
    /// This stream is deliberately unbounded: records are pushed as fast as the
    /// facility dispatches them, whether or not demand was signalled, including
    /// a demand of zero. The operation exists purely so the handle satisfies
    /// demand-based consumer protocols; it is not dead code and is covered by
    /// tests.
    fn request(&self, demand: u64);

    /// True while the subscription still forwards records.
    fn is_active(&self) -> bool;

    /// Token cancelled together with the subscription.
    ///
    /// Lets async consumers await teardown instead of polling
    /// [`is_active`](Self::is_active).
    fn cancellation_token(&self) -> CancellationToken;
}
