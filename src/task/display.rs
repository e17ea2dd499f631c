//! Task-count display task
//!
//! Periodically reports how many managed tasks are live, so a glance at the
//! telemetry stream shows whether a task-based run is still in flight.
//! Spawned once at program start and never torn down.

use embassy_time::{Duration, Ticker};

use crate::task::orchestrate;

/// Report period; phase-locked 10 Hz cycle
const PERIOD: Duration = Duration::from_millis(100);

#[embassy_executor::task]
pub async fn display() {
    info!("display task started");
    let mut ticker = Ticker::every(PERIOD);
    loop {
        info!("managed tasks: {}", orchestrate::managed_task_count());
        ticker.next().await;
    }
}
