//! Autonomous routines
//!
//! The three shapes a competition callback may invoke: two sequential
//! routines that block on the motion primitives directly, and the
//! task-based routine that spawns the intake/drive pair and returns
//! immediately. The firmware binary picks one per competition phase.

use embassy_executor::Spawner;

use crate::system::drivebase::Drivebase;
use crate::system::intake::Intake;
use crate::system::{halt, intake_command, odom_command};
use crate::task::orchestrate::{self, TaskError};

/// Skill-run demo: two relative-move legs with an explicit speed clamp.
///
/// Sequential and single-threaded; blocks until both legs settle. The
/// forward leg deliberately requests more speed than the drivetrain allows
/// to show the clamp catching it; the return leg runs at the configured
/// default speed.
pub async fn skill_auton(drivebase: &Drivebase) {
    // not spawned through the orchestrator, so a stale teardown request
    // from an earlier kill must not interrupt these motions
    halt::clear();

    let speed = drivebase.clamp_speed(300);
    info!("skill auton: forward leg at {} rpm", speed.rpm);
    drivebase.drive_relative(1000.0, speed.rpm).await;

    let return_rpm = drivebase.config().default_rpm;
    info!("skill auton: return leg at {} rpm", return_rpm);
    drivebase.drive_relative(-1000.0, return_rpm).await;
}

/// Match-run demo: scripted drive and turn with literal values.
///
/// Drives out 100 cm, pivots a quarter turn clockwise, then backs up 25 cm
/// at full speed. Blocks until the last motion settles.
pub async fn match_auton(drivebase: &Drivebase) {
    halt::clear();

    info!("match auton: forward 100 cm at 65 rpm");
    drivebase.drive_for_distance(100.0, 65).await;

    info!("match auton: pivot 90 deg at 25 rpm");
    drivebase.pivot_turn(90.0, 25).await;

    info!("match auton: back 25 cm at 100 rpm");
    drivebase.drive_for_distance(-25.0, 100).await;
}

/// Task-based run: spawn the intake/drive pair and return immediately.
///
/// Any previously managed tasks are killed first, the odometers are asked
/// to re-zero and the intake is forced off until the drive task's script
/// enables it. Fire-and-forget: control is recovered asynchronously when
/// the scripted sequence finishes (see [`crate::task::drive::done`]).
pub async fn task_auton(
    spawner: Spawner,
    drivebase: Drivebase,
    intake: Intake,
) -> Result<(), TaskError> {
    orchestrate::kill_tasks().await;

    odom_command::request_reset();
    intake_command::set_running(false);

    orchestrate::spawn_intake(spawner, intake)?;
    orchestrate::spawn_drive(spawner, drivebase)?;
    Ok(())
}
