//! Drivebase motion primitives
//!
//! Converts linear/angular travel requests into encoder targets, commands
//! both wheels and blocks the calling task until the encoder settles inside
//! a fixed tolerance window. Straight drives, pivot turns and relative
//! nudges all funnel through one move-to-target routine.
//!
//! There is deliberately no timeout: a wheel that never reaches its window
//! blocks its caller until teardown is requested, at which point the wheels
//! are stopped and the primitive reports [`Completion::Interrupted`].

use core::f64::consts::PI;

use embassy_time::{Duration, Timer};

use crate::system::actuator::Actuator;
use crate::system::config::DriveConfig;
use crate::system::halt;

/// Half-width of the settle window in encoder-degrees.
///
/// Open-loop moves never land exactly on target, so completion is "strictly
/// inside target ± 5 degrees", independent of travel distance.
pub const SETTLE_TOLERANCE_DEG: f64 = 5.0;

/// Encoder poll period while waiting for a move to settle
const SETTLE_POLL: Duration = Duration::from_millis(2);

/// How a blocking motion ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Completion {
    /// The polled encoder settled inside the tolerance window.
    Settled,
    /// Teardown was requested mid-move; the wheels were stopped early.
    Interrupted,
}

/// A speed request after clamping against the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedCommand {
    /// The rpm that will actually be commanded
    pub rpm: i32,
    /// Whether the request exceeded the maximum and was reduced
    pub clamped: bool,
}

/// Strict acceptance bounds around an absolute target magnitude.
pub(crate) fn settle_window(target_deg: f64) -> (f64, f64) {
    let magnitude = libm::fabs(target_deg);
    (
        magnitude - SETTLE_TOLERANCE_DEG,
        magnitude + SETTLE_TOLERANCE_DEG,
    )
}

/// The two-wheel drivebase.
///
/// Copyable view over the two `'static` wheel handles plus geometry, so the
/// sequential routines and the scripted drive task can each carry their own.
#[derive(Clone, Copy)]
pub struct Drivebase {
    left: &'static dyn Actuator,
    right: &'static dyn Actuator,
    config: DriveConfig,
}

impl Drivebase {
    pub fn new(
        left: &'static dyn Actuator,
        right: &'static dyn Actuator,
        config: DriveConfig,
    ) -> Self {
        Self {
            left,
            right,
            config,
        }
    }

    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    /// Wheel rotation in encoder-degrees needed to travel `distance_cm`.
    ///
    /// One full wheel turn covers `π * wheel_diam` cm of ground, so
    /// `degrees = distance / (π * wheel_diam) * 360`. Negative distances
    /// yield negative degrees and drive the robot backwards.
    pub fn distance_to_degrees(&self, distance_cm: f64) -> f64 {
        (distance_cm / (PI * self.config.wheel_diam_cm)) * 360.0
    }

    /// Wheel rotation in encoder-degrees for an in-place turn of `angle_deg`.
    ///
    /// The wheels run on the turning circle whose diameter is the wheel
    /// base; the arc each wheel covers converts to wheel rotation exactly
    /// like a straight distance. Positive angles are clockwise.
    pub fn pivot_to_degrees(&self, angle_deg: f64) -> f64 {
        let turn_circumference_cm = PI * self.config.wheel_base_cm;
        let arc_cm = angle_deg * turn_circumference_cm / 360.0;
        self.distance_to_degrees(arc_cm)
    }

    /// Clamp a speed request against the configured maximum.
    ///
    /// Clamping is silent towards the motion itself (the move proceeds at
    /// the reduced speed) but the result records that it happened.
    pub fn clamp_speed(&self, requested_rpm: i32) -> SpeedCommand {
        if requested_rpm > self.config.max_allowed_rpm {
            warn!(
                "speed request {} rpm over limit, clamping to {}",
                requested_rpm, self.config.max_allowed_rpm
            );
            SpeedCommand {
                rpm: self.config.max_allowed_rpm,
                clamped: true,
            }
        } else {
            SpeedCommand {
                rpm: requested_rpm,
                clamped: false,
            }
        }
    }

    /// Drive straight for `distance_cm` (negative for reverse) at `speed_rpm`.
    ///
    /// Blocks the calling task until the left encoder settles inside the
    /// tolerance window, then hard stops both wheels.
    pub async fn drive_for_distance(&self, distance_cm: f64, speed_rpm: i32) -> Completion {
        let target_deg = self.distance_to_degrees(distance_cm);
        debug!(
            "drive for distance: {} cm at {} rpm -> {} deg",
            distance_cm, speed_rpm, target_deg
        );
        self.move_to_target(target_deg, target_deg, speed_rpm).await
    }

    /// Pivot in place by `angle_deg` (positive clockwise) at `speed_rpm`.
    ///
    /// The left wheel runs forward and the right wheel backward by the same
    /// rotation; the sign of the angle carries the direction, there is no
    /// per-direction branch.
    pub async fn pivot_turn(&self, angle_deg: f64, speed_rpm: i32) -> Completion {
        let target_deg = self.pivot_to_degrees(angle_deg);
        debug!(
            "pivot turn: {} deg at {} rpm -> {} wheel deg",
            angle_deg, speed_rpm, target_deg
        );
        self.move_to_target(target_deg, -target_deg, speed_rpm).await
    }

    /// Move both wheels by a raw encoder delta at `speed_rpm`.
    ///
    /// Relative counterpart of [`drive_for_distance`](Self::drive_for_distance)
    /// for routines that think in encoder units rather than centimeters;
    /// the settle window and stop behavior are identical.
    pub async fn drive_relative(&self, delta_deg: f64, speed_rpm: i32) -> Completion {
        let speed = self.clamp_speed(speed_rpm);
        debug!("relative move: {} deg at {} rpm", delta_deg, speed.rpm);
        self.left.tare_position();
        self.right.tare_position();
        self.left.move_relative(delta_deg, speed.rpm);
        self.right.move_relative(delta_deg, speed.rpm);
        let end = self.settle(delta_deg).await;
        self.stop();
        end
    }

    /// Command per-wheel absolute targets and block until settled.
    ///
    /// The shared skeleton of every blocking motion: clamp the speed, tare
    /// both encoders, issue the moves, poll the left wheel into the window,
    /// stop. Only the left wheel is polled as the completion signal; the
    /// right wheel is assumed to track within tolerance.
    pub async fn move_to_target(
        &self,
        left_deg: f64,
        right_deg: f64,
        speed_rpm: i32,
    ) -> Completion {
        let speed = self.clamp_speed(speed_rpm);
        let (min_target, max_target) = settle_window(left_deg);
        debug!("settle window {} .. {}", min_target, max_target);

        self.left.tare_position();
        self.right.tare_position();
        self.left.move_absolute(left_deg, speed.rpm);
        self.right.move_absolute(right_deg, speed.rpm);

        let end = self.settle(left_deg).await;
        // Always stop, even when interrupted mid-move: teardown must never
        // leave the wheels running.
        self.stop();
        debug!(
            "move ended: left {} right {}",
            self.left.position(),
            self.right.position()
        );
        end
    }

    /// Poll the left encoder until its magnitude is strictly inside the
    /// window around `target_deg`, yielding for 2 ms between polls.
    async fn settle(&self, target_deg: f64) -> Completion {
        let (min_target, max_target) = settle_window(target_deg);
        loop {
            if halt::requested() {
                return Completion::Interrupted;
            }
            let position = libm::fabs(self.left.position());
            if position > min_target && position < max_target {
                return Completion::Settled;
            }
            Timer::after(SETTLE_POLL).await;
        }
    }

    /// Hard stop both wheels (zero velocity).
    pub fn stop(&self) {
        self.left.stop();
        self.right.stop();
    }
}
