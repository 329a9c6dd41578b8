//! # Severity levels and subscription filters.
//!
//! [`Level`] classifies a single record; [`LevelFilter`] is the minimum-severity
//! gate attached to an observer registration. Filtering is applied by the
//! [`Facility`](crate::Facility) **before** an observer is invoked, so observers
//! and bridges never re-check severity themselves.
//!
//! ## Ordering
//! Levels are ordered by verbosity: `Error` is the least verbose (most severe),
//! `Verbose` the most. A filter accepts every record whose level is at most as
//! verbose as the filter itself:
//!
//! ```text
//! filter          accepts
//! ------          -------
//! Off             nothing
//! Error           Error
//! Warning         Error, Warning
//! Info            Error, Warning, Info
//! Debug           Error, Warning, Info, Debug
//! All             everything
//! ```

/// Severity of a single [`LogRecord`](crate::LogRecord).
///
/// Ordered by increasing verbosity: `Error < Warning < Info < Debug < Verbose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Unrecoverable or user-visible failures.
    Error = 1,
    /// Suspicious conditions that do not stop execution.
    Warning,
    /// High-level progress messages.
    Info,
    /// Developer-facing diagnostics.
    Debug,
    /// Very chatty tracing output.
    Verbose,
}

impl Level {
    /// Returns a short stable label (snake_case) for use in output formatting.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Verbose => "verbose",
        }
    }
}

/// Minimum-severity gate for one observer registration.
///
/// Part of the subscription configuration: each subscriber picks its own filter
/// and the facility compares it against every record's [`Level`] before
/// dispatching to that subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelFilter {
    /// Accept nothing.
    Off,
    /// Accept `Error` only.
    Error,
    /// Accept `Error` and `Warning`.
    Warning,
    /// Accept `Error`, `Warning` and `Info`.
    Info,
    /// Accept everything except `Verbose`.
    Debug,
    /// Accept every record.
    All,
}

impl LevelFilter {
    /// True if a record at `level` passes this filter.
    #[must_use]
    pub fn accepts(&self, level: Level) -> bool {
        match self {
            LevelFilter::Off => false,
            LevelFilter::Error => level <= Level::Error,
            LevelFilter::Warning => level <= Level::Warning,
            LevelFilter::Info => level <= Level::Info,
            LevelFilter::Debug => level <= Level::Debug,
            LevelFilter::All => true,
        }
    }
}

impl Default for LevelFilter {
    /// `All`: deliver everything unless the subscriber narrows it down.
    fn default() -> Self {
        LevelFilter::All
    }
}
