//! Task orchestration
//!
//! Owns the managed task slots (intake, drive) and their start/kill
//! lifecycle. Tasks should in general be killed between competition phase
//! changes; the display and odometry tasks are spawned once at program
//! start and are deliberately excluded from teardown.
//!
//! Teardown is cooperative: `kill_tasks` raises the halt flag, and the
//! managed tasks stop their actuators and exit on their own within one poll
//! cycle. A slot therefore goes back to absent immediately, while the
//! executor reclaims the underlying task shortly after; a respawn that
//! races a still-unwinding task is reported, not silently dropped.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_executor::{SpawnError, Spawner};
use embassy_time::{Duration, Timer};

use crate::system::actuator::Odometer;
use crate::system::drivebase::Drivebase;
use crate::system::halt;
use crate::system::intake::Intake;
use crate::task;

/// Grace period after a kill before the executor is expected to have
/// reclaimed the halted tasks; one intake poll cycle.
const RECLAIM_DELAY: Duration = Duration::from_millis(20);

/// Occupancy of the managed slots. A slot stays occupied when its task
/// runs to completion on its own; only `kill_tasks` frees it.
static INTAKE_LIVE: AtomicBool = AtomicBool::new(false);
static DRIVE_LIVE: AtomicBool = AtomicBool::new(false);

/// The managed task slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskSlot {
    Intake,
    Drive,
}

/// Task lifecycle errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskError {
    /// The slot already holds a live task; call
    /// [`kill_tasks`] before spawning into it again.
    AlreadyRunning(TaskSlot),
}

/// Number of occupied managed slots.
pub fn managed_task_count() -> u8 {
    INTAKE_LIVE.load(Ordering::Relaxed) as u8 + DRIVE_LIVE.load(Ordering::Relaxed) as u8
}

/// Tear down all managed tasks. Idempotent; killing absent tasks is a no-op.
///
/// The permanent display and odometry tasks are not touched. Returns after
/// a short grace sleep so the halted tasks have observed the flag, stopped
/// their actuators and released their executor slots before any respawn.
pub async fn kill_tasks() {
    halt::request();
    INTAKE_LIVE.store(false, Ordering::Relaxed);
    DRIVE_LIVE.store(false, Ordering::Relaxed);
    Timer::after(RECLAIM_DELAY).await;
}

/// Spawn the intake task into its slot.
pub fn spawn_intake(spawner: Spawner, intake: Intake) -> Result<(), TaskError> {
    if INTAKE_LIVE.load(Ordering::Relaxed) {
        return Err(TaskError::AlreadyRunning(TaskSlot::Intake));
    }
    halt::clear();
    spawner
        .spawn(task::intake::intake(intake))
        .map_err(|_| TaskError::AlreadyRunning(TaskSlot::Intake))?;
    INTAKE_LIVE.store(true, Ordering::Relaxed);
    Ok(())
}

/// Spawn the scripted drive task into its slot.
pub fn spawn_drive(spawner: Spawner, drivebase: Drivebase) -> Result<(), TaskError> {
    if DRIVE_LIVE.load(Ordering::Relaxed) {
        return Err(TaskError::AlreadyRunning(TaskSlot::Drive));
    }
    halt::clear();
    spawner
        .spawn(task::drive::drive(drivebase))
        .map_err(|_| TaskError::AlreadyRunning(TaskSlot::Drive))?;
    DRIVE_LIVE.store(true, Ordering::Relaxed);
    Ok(())
}

/// Spawn the permanent background tasks. Call once at program start.
pub fn start_background_tasks(
    spawner: Spawner,
    left_odom: &'static dyn Odometer,
    right_odom: &'static dyn Odometer,
) -> Result<(), SpawnError> {
    spawner.spawn(task::odometry::odometry(left_odom, right_odom))?;
    spawner.spawn(task::display::display())?;
    Ok(())
}
