//! Device seams for motors and rotation sensors
//!
//! The firmware binary implements these traits for its smart devices and
//! hands the crate `&'static` handles. Methods take `&self`: a smart
//! actuator is a port-addressed handle and a command is a message to the
//! device, not a mutation of crate state. Implementations must be `Sync`
//! so the same handle can be given to a respawned task after teardown.

/// A positional actuator with an integrated encoder.
///
/// Positions are encoder-degrees of the output shaft; speeds are rpm.
/// The installed gear cartridge bounds the usable rpm range (100 for red,
/// 200 for green, 600 for blue); this crate only clamps against the
/// configured maximum and leaves gearing to the device.
pub trait Actuator: Sync {
    /// Move to an absolute encoder position at the given speed.
    fn move_absolute(&self, target_deg: f64, speed_rpm: i32);

    /// Move by a relative encoder delta at the given speed.
    fn move_relative(&self, delta_deg: f64, speed_rpm: i32);

    /// Command a velocity in rpm; the sign encodes direction.
    fn move_velocity(&self, speed_rpm: i32);

    /// Current encoder position in degrees.
    fn position(&self) -> f64;

    /// Reset the encoder so the current position reads zero.
    fn tare_position(&self);

    /// Hard stop: command zero velocity.
    fn stop(&self) {
        self.move_velocity(0);
    }
}

/// A free-spinning rotation sensor used as an odometer.
pub trait Odometer: Sync {
    /// Cumulative position in ticks.
    fn position(&self) -> i32;

    /// Zero the cumulative position.
    fn reset_position(&self);

    /// Flip the sign convention of the sensor.
    fn set_reversed(&self, reversed: bool);

    /// Whether the sensor is configured reversed.
    fn reversed(&self) -> bool;
}
