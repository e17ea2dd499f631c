//! Intake task
//!
//! Purely reactive: every poll cycle it maps the shared run/reverse flags to
//! a preset rpm and hands that to the intake controller. The drive task does
//! the pacing; this task never decides anything on its own. The fixed sleep
//! keeps it from starving other tasks and bounds how stale a flag write can
//! be before the mechanism reacts.

use embassy_time::{Duration, Timer};

use crate::system::intake::Intake;
use crate::system::{halt, intake_command};

/// Clockwise rpm while enabled in the forward direction
const FORWARD_RPM: i32 = 75;

/// Counter-clockwise rpm while enabled in reverse
const REVERSE_RPM: i32 = -50;

/// Flag poll period; also the worst-case reaction latency
const POLL: Duration = Duration::from_millis(20);

/// Map the run/reverse flags to a velocity command.
///
/// A disabled intake is stopped no matter what the direction flag says.
fn intake_speed(running: bool, reversed: bool) -> i32 {
    match (running, reversed) {
        (false, _) => 0,
        (true, false) => FORWARD_RPM,
        (true, true) => REVERSE_RPM,
    }
}

/// Reactive intake loop; runs until teardown is requested.
#[embassy_executor::task]
pub async fn intake(intake: Intake) {
    info!("intake task started");
    loop {
        if halt::requested() {
            break;
        }
        intake.run(intake_speed(
            intake_command::running(),
            intake_command::reversed(),
        ));
        Timer::after(POLL).await;
    }
    // leave the mechanism stopped on the way out
    intake.run(0);
    info!("intake task stopped");
}
