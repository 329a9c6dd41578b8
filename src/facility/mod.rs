//! Logging facility: observer registry, synchronous broadcast, ambient instance.
//!
//! This module is the push side of the crate. It accepts [`Observer`]
//! registrations scoped to a [`LevelFilter`](crate::LevelFilter) and dispatches
//! every matching [`LogRecord`](crate::LogRecord) to each of them, inline on
//! the logging thread.
//!
//! ## Contents
//! - [`Observer`], [`ObserverId`] the push-target contract and its identity
//! - [`Facility`] the registry plus dispatch
//! - [`install`], [`installed`], [`uninstall`] explicit lifecycle of the
//!   process-wide instance
//!
//! See `stream/` for the pull side that adapts this facility into
//! per-subscriber streams.

#[allow(clippy::module_inception)]
mod facility;
mod global;
mod observer;

pub use facility::Facility;
pub use global::{install, installed, uninstall};
pub use observer::{Observer, ObserverId};
