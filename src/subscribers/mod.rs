//! Downstream consumers built on top of the stream core.
//!
//! Nothing here is required by the adapter itself; these are the convenience
//! layers most consumers actually reach for:
//!
//! - [`RecordStream`] records as a [`futures::Stream`], for async pipelines
//! - [`Drain`], [`DrainWorker`] async handlers on a dedicated worker task,
//!   panic-isolated from the facility and from each other
//! - [`ConsoleWriter`] stdout demo subscriber (feature `console`)

mod channel;
mod drain;

#[cfg(feature = "console")]
mod console;

pub use channel::RecordStream;
pub use drain::{Drain, DrainWorker};

#[cfg(feature = "console")]
pub use console::ConsoleWriter;
