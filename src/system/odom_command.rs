//! Odometer reset requests
//!
//! Any caller may request a reset; only the odometry task consumes it.

use core::sync::atomic::{AtomicBool, Ordering};

static RESET: AtomicBool = AtomicBool::new(false);

/// Ask the odometry task to zero both sensors on its next cycle.
pub fn request_reset() {
    RESET.store(true, Ordering::Relaxed);
}

/// Consume a pending reset request, if any.
pub fn take_reset() -> bool {
    RESET.swap(false, Ordering::Relaxed)
}
