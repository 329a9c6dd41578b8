//! # Simple console subscriber for debugging and demos.
//!
//! [`ConsoleWriter`] prints records to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [warning] target=storage disk almost full
//! [error] connection refused
//! ```

use crate::records::LogRecord;
use crate::stream::Subscriber;

/// Simple stdout subscriber.
///
/// Enabled via the `console` feature. Not intended for production use:
/// implement a custom [`Subscriber`] or [`Drain`](crate::Drain) for structured
/// output or shipping elsewhere.
#[derive(Default)]
pub struct ConsoleWriter;

impl Subscriber for ConsoleWriter {
    fn on_record(&self, record: LogRecord) {
        match &record.target {
            Some(target) => println!(
                "[{}] target={} {}",
                record.level.as_label(),
                target,
                record.message
            ),
            None => println!("[{}] {}", record.level.as_label(), record.message),
        }
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
