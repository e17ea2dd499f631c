//! Intake mechanism controller
//!
//! Thin velocity-direction mapping over the intake motor. The motor's own
//! control loop holds the commanded rpm; nothing here blocks or fails.

use crate::system::actuator::Actuator;

/// The intake mechanism.
#[derive(Clone, Copy)]
pub struct Intake {
    motor: &'static dyn Actuator,
}

impl Intake {
    pub fn new(motor: &'static dyn Actuator) -> Self {
        Self { motor }
    }

    /// Run the intake at `speed_rpm`; negative runs it counter-clockwise,
    /// zero stops it.
    pub fn run(&self, speed_rpm: i32) {
        if speed_rpm == 0 {
            self.motor.stop();
        } else {
            self.motor.move_velocity(speed_rpm);
        }
    }
}
