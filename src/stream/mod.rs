//! Stream core: the pull side that adapts the facility's push broadcast.
//!
//! This module owns the adapter itself. A [`StreamSource`] turns one
//! [`Facility`](crate::Facility) into a cold, multicast, unbounded source of
//! [`LogRecord`](crate::LogRecord)s; each `subscribe` call creates a private
//! bridge that is simultaneously the facility-side observer and the
//! consumer-side [`Subscription`] handle.
//!
//! ## Contents
//! - [`StreamSource`] the per-subscription factory
//! - [`Subscriber`], [`SubscriberFn`] the consumer contract and closure adapter
//! - [`Subscription`], [`SubscriptionRef`] the opaque cancellation handle
//!
//! The bridge type itself is deliberately not exported: consumers interact with
//! it only through the two traits.

mod bridge;
mod source;
mod subscriber;
mod subscription;

pub use source::StreamSource;
pub use subscriber::{Subscriber, SubscriberFn};
pub use subscription::{Subscription, SubscriptionRef};
