//! Intake run/direction flags
//!
//! Inter-task signaling between the scripted drive task (sole writer during
//! task-based runs) and the intake task (sole reader, polling every cycle).
//! Plain atomics, no locking: each flag has one producer and one consumer,
//! and a write is observed within one intake poll period.

use core::sync::atomic::{AtomicBool, Ordering};

/// Whether the intake task should run the mechanism
static RUN: AtomicBool = AtomicBool::new(false);

/// Whether the mechanism should run in the reverse direction
static REVERSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable the intake mechanism.
pub fn set_running(run: bool) {
    RUN.store(run, Ordering::Relaxed);
}

/// Select forward (`false`) or reverse (`true`) intake direction.
///
/// Takes effect only while the intake is enabled; a disabled intake stays
/// stopped regardless of direction.
pub fn set_reversed(reverse: bool) {
    REVERSE.store(reverse, Ordering::Relaxed);
}

pub fn running() -> bool {
    RUN.load(Ordering::Relaxed)
}

pub fn reversed() -> bool {
    REVERSE.load(Ordering::Relaxed)
}
