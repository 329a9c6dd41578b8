//! # Process-wide facility instance.
//!
//! Most programs run a single facility for their whole lifetime. This module
//! holds that ambient instance with an explicit lifecycle: [`install`] once at
//! startup, [`installed`] to reach it from anywhere, [`uninstall`] on teardown.
//!
//! Teardown drops every remaining observer registration before releasing the
//! instance, so bridges that were never cancelled do not keep receiving
//! records, and their later `cancel()` degrades to a safe no-op (their weak
//! back-reference no longer upgrades once the last `Arc` is gone).

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::FacilityError;

use super::Facility;

static INSTALLED: RwLock<Option<Arc<Facility>>> = RwLock::new(None);

/// Installs `facility` as the process-wide instance.
///
/// Single-shot: fails with [`FacilityError::AlreadyInstalled`] until
/// [`uninstall`] is called.
pub fn install(facility: Arc<Facility>) -> Result<(), FacilityError> {
    let mut slot = INSTALLED.write().unwrap_or_else(PoisonError::into_inner);
    if slot.is_some() {
        return Err(FacilityError::AlreadyInstalled);
    }
    *slot = Some(facility);
    Ok(())
}

/// Returns the process-wide facility.
pub fn installed() -> Result<Arc<Facility>, FacilityError> {
    INSTALLED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(FacilityError::NotInstalled)
}

/// Tears down the process-wide facility.
///
/// Removes all remaining observer registrations and releases the ambient
/// reference. Returns the instance in case the caller still holds work for it;
/// `None` when nothing was installed.
pub fn uninstall() -> Option<Arc<Facility>> {
    let facility = INSTALLED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()?;
    facility.remove_all();
    Some(facility)
}

#[cfg(test)]
mod tests {
    use super::*;

    // All assertions live in one test: the ambient slot is process-global and
    // cargo runs tests in parallel.
    #[test]
    fn test_install_lifecycle() {
        let _ = uninstall();
        assert!(matches!(installed(), Err(FacilityError::NotInstalled)));

        let facility = Facility::new();
        install(Arc::clone(&facility)).unwrap();
        assert!(Arc::ptr_eq(&installed().unwrap(), &facility));

        let second = Facility::new();
        assert!(matches!(
            install(second),
            Err(FacilityError::AlreadyInstalled)
        ));

        let returned = uninstall().unwrap();
        assert!(Arc::ptr_eq(&returned, &facility));
        assert!(uninstall().is_none());
        assert!(matches!(installed(), Err(FacilityError::NotInstalled)));
    }
}
