//! Single-flight request gate
//!
//! At most one provider request may be outstanding per session. A second
//! request while one is in flight is rejected rather than queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tinyembed_domain::error::{Error, Result};

/// Busy flag shared by every user-initiated provider call
///
/// # Example
///
/// ```
/// use tinyembed_application::RequestGate;
///
/// let gate = RequestGate::new();
/// let permit = gate.try_acquire().unwrap();
/// assert!(gate.try_acquire().is_err());
/// drop(permit);
/// assert!(gate.try_acquire().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    busy: Arc<AtomicBool>,
}

impl RequestGate {
    /// Create an idle gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the gate, or fail with [`Error::Busy`] if it is held
    pub fn try_acquire(&self) -> Result<RequestPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| RequestPermit {
                busy: Arc::clone(&self.busy),
            })
            .map_err(|_| Error::Busy)
    }

    /// Whether a request is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held for the duration of one provider request; releases the gate on drop
#[derive(Debug)]
pub struct RequestPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for RequestPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
