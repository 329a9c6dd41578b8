//! Error types for the ambient facility surface.
//!
//! The bridge core itself has no error paths: every operation either succeeds
//! or degrades to a no-op (cancel twice, deliver after cancel, deregister from
//! a facility that is already gone). The only fallible surface in the crate is
//! installing and looking up the process-wide [`Facility`](crate::Facility).

use thiserror::Error;

/// # Errors from the process-wide facility registry.
///
/// Raised by [`install`](crate::install) and [`installed`](crate::installed);
/// never by dispatch, subscription or cancellation paths.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FacilityError {
    /// A facility is already installed; `install` is single-shot until
    /// [`uninstall`](crate::uninstall) is called.
    #[error("a logging facility is already installed")]
    AlreadyInstalled,

    /// No facility has been installed yet.
    #[error("no logging facility is installed")]
    NotInstalled,
}

impl FacilityError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use logtap::FacilityError;
    ///
    /// assert_eq!(FacilityError::NotInstalled.as_label(), "facility_not_installed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            FacilityError::AlreadyInstalled => "facility_already_installed",
            FacilityError::NotInstalled => "facility_not_installed",
        }
    }
}
