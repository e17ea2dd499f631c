//! Drivebase geometry and speed limits
//!
//! Constructed by the firmware binary at startup and carried by the
//! [`Drivebase`](crate::system::drivebase::Drivebase); the core treats these
//! as inputs, never as internal state.

/// Geometry and speed configuration for the drivebase.
#[derive(Debug, Clone, Copy)]
pub struct DriveConfig {
    /// Drive wheel diameter in cm
    pub wheel_diam_cm: f64,
    /// Distance between the centers of the two front wheels in cm
    pub wheel_base_cm: f64,
    /// Ceiling for any commanded speed, in rpm
    pub max_allowed_rpm: i32,
    /// Preferred cruising speed, in rpm
    pub default_rpm: i32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            wheel_diam_cm: 7.0,
            wheel_base_cm: 38.5,
            max_allowed_rpm: 100,
            default_rpm: 75,
        }
    }
}
