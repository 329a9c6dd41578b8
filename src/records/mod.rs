//! Record data model: severity levels, filters and the log record value.
//!
//! ## Contents
//! - [`Level`], [`LevelFilter`] severity classification and per-subscription gating
//! - [`LogRecord`] the immutable event value that flows from the facility to subscribers

mod level;
mod record;

pub use level::{Level, LevelFilter};
pub use record::LogRecord;
