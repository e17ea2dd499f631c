//! Cooperative teardown flag for the managed tasks
//!
//! Raised by the orchestrator's `kill_tasks`, cleared by the next spawn.
//! The intake task checks it every poll cycle and the drivebase settle loop
//! checks it between encoder polls, so a kill interrupts even a primitive
//! that is blocked mid-move. Tasks observing the flag stop their actuators
//! before exiting; forced removal without a stop does not exist here.

use core::sync::atomic::{AtomicBool, Ordering};

static HALT: AtomicBool = AtomicBool::new(false);

/// Ask all managed tasks to stop their actuators and exit.
pub fn request() {
    HALT.store(true, Ordering::Relaxed);
}

/// Clear a pending teardown request before spawning fresh tasks.
pub fn clear() {
    HALT.store(false, Ordering::Relaxed);
}

/// Whether teardown has been requested.
pub fn requested() -> bool {
    HALT.load(Ordering::Relaxed)
}
