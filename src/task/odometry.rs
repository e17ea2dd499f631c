//! Odometry drift reporting task
//!
//! The two free-spinning odometer wheels should advance identically on
//! straight travel; the difference between them is drift, a quick health
//! check for the drivebase. This task only reports, it does not fuse the
//! readings into a position estimate.
//!
//! Spawned once at program start and never torn down.

use embassy_time::{Duration, Ticker};

use crate::system::actuator::Odometer;
use crate::system::odom_command;

/// Report period; phase-locked so accumulated sleep error does not drift
const PERIOD: Duration = Duration::from_millis(50);

#[embassy_executor::task]
pub async fn odometry(left: &'static dyn Odometer, right: &'static dyn Odometer) {
    // Both sensors must share one sign convention for straight travel; the
    // right side is mounted mirrored, so make sure it reads reversed.
    if !right.reversed() {
        right.set_reversed(true);
    }
    debug!("right odometer reversed: {}", right.reversed());

    let mut ticker = Ticker::every(PERIOD);
    loop {
        if odom_command::take_reset() {
            left.reset_position();
            right.reset_position();
        }
        let drift = left.position() - right.position();
        info!("odom drift: {}", drift);
        ticker.next().await;
    }
}
