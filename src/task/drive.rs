//! Scripted drive task
//!
//! Runs the autonomous choreography once and exits. The drive task is the
//! sole controller of pacing: it interleaves blocking motions with writes to
//! the intake flags, and the intake task follows along. A teardown request
//! interrupts whichever motion is in flight and abandons the rest of the
//! script.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};

use crate::system::drivebase::{Completion, Drivebase};
use crate::system::intake_command;

/// Signaled once per scripted run with its outcome.
///
/// The task-based autonomous routine is fire-and-forget; a supervisor that
/// wants control back when the choreography ends can await this.
static DONE: Signal<CriticalSectionRawMutex, Completion> = Signal::new();

/// Waits for the end of the current scripted run.
pub async fn done() -> Completion {
    DONE.wait().await
}

/// Bail out of the script as soon as a motion reports an interruption.
macro_rules! step {
    ($motion:expr) => {
        if let Completion::Interrupted = $motion {
            return Completion::Interrupted;
        }
    };
}

/// One-shot choreography task for the task-based autonomous run.
#[embassy_executor::task]
pub async fn drive(drivebase: Drivebase) {
    info!("drive task started");
    let outcome = script(&drivebase).await;
    info!("drive task finished");
    DONE.signal(outcome);
}

/// The scripted sequence. Flag writes take effect within one intake poll
/// period; the pause after restoring the forward direction gives the
/// mechanism a moment to actually run before it is shut off again.
async fn script(drivebase: &Drivebase) -> Completion {
    intake_command::set_running(false);
    step!(drivebase.drive_for_distance(100.0, 50).await);

    intake_command::set_running(true);
    step!(drivebase.drive_for_distance(50.0, 50).await);

    intake_command::set_reversed(true);
    step!(drivebase.pivot_turn(90.0, 25).await);

    intake_command::set_reversed(false);
    Timer::after(Duration::from_millis(300)).await;

    intake_command::set_running(false);
    step!(drivebase.drive_for_distance(-100.0, 50).await);

    Completion::Settled
}
