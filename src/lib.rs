//! Autonomous core for a small competition robot
//!
//! Drives two open-loop wheel motors to traverse distances and pivot-turn,
//! runs an intake mechanism, and coordinates both through cooperative tasks
//! during the autonomous period. The firmware binary owns the hardware: it
//! implements the [`system::actuator`] traits for its motors and rotation
//! sensors, spawns the permanent background tasks once at startup, and calls
//! one of the [`auton`] routines from its competition callbacks.
//!
//! Built on the embassy executor; host builds (the default `std` feature)
//! run the same task bodies against mock devices for testing.
//!
//! # Wiring
//!
//! ```ignore
//! use taskbot::system::config::DriveConfig;
//! use taskbot::system::drivebase::Drivebase;
//! use taskbot::system::intake::Intake;
//! use taskbot::task::orchestrate;
//!
//! // LEFT_WHEEL, RIGHT_WHEEL, INTAKE_MOTOR, LEFT_ODOM and RIGHT_ODOM are
//! // the firmware's `'static` device handles implementing the traits in
//! // `system::actuator`.
//! let drivebase = Drivebase::new(&LEFT_WHEEL, &RIGHT_WHEEL, DriveConfig::default());
//! let intake = Intake::new(&INTAKE_MOTOR);
//!
//! orchestrate::start_background_tasks(spawner, &LEFT_ODOM, &RIGHT_ODOM)?;
//!
//! // from the autonomous competition callback:
//! taskbot::auton::task_auton(spawner, drivebase, intake).await?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// This must go FIRST so that the logging macros are visible everywhere.
#[macro_use]
mod fmt;

/// Autonomous routines composing the primitives and tasks
pub mod auton;
/// Core system components: device seams, configuration, controllers, flags
pub mod system;
/// Task implementations and the orchestrator
pub mod task;
