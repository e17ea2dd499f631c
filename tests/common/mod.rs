//! Mock devices and a global command log shared by the integration tests.
//!
//! The mocks are const-constructible so tests can hold them in statics and
//! hand `&'static dyn` handles to the crate, exactly as firmware would with
//! real devices. Every motor command is appended to one global log so tests
//! can assert the order of issued commands.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU32, AtomicU64, Ordering};
use std::sync::Mutex;

use taskbot::system::actuator::{Actuator, Odometer};

/// One observed device command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Absolute move on a wheel: (side, target degrees, rpm)
    Target(Side, f64, i32),
    /// Relative move on a wheel: (side, delta degrees, rpm)
    Relative(Side, f64, i32),
    /// Velocity command on a wheel (0 = hard stop)
    Velocity(Side, i32),
    /// Intake velocity changed to this rpm
    IntakeVelocity(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub static LOG: Mutex<Vec<Event>> = Mutex::new(Vec::new());

pub fn log(event: Event) {
    LOG.lock().unwrap().push(event);
}

pub fn take_log() -> Vec<Event> {
    std::mem::take(&mut *LOG.lock().unwrap())
}

/// A wheel motor whose encoder reports the commanded target after a fixed
/// number of position polls, emulating a move that takes time to settle.
/// With `settle_polls = 0` every move lands instantly.
pub struct MockWheel {
    side: Side,
    settle_polls: u32,
    target_bits: AtomicU64,
    polls_left: AtomicU32,
}

impl MockWheel {
    pub const fn new(side: Side, settle_polls: u32) -> Self {
        Self {
            side,
            settle_polls,
            target_bits: AtomicU64::new(0),
            polls_left: AtomicU32::new(0),
        }
    }

    fn begin_move(&self, target_deg: f64) {
        self.target_bits
            .store(target_deg.to_bits(), Ordering::Relaxed);
        self.polls_left.store(self.settle_polls, Ordering::Relaxed);
    }
}

impl Actuator for MockWheel {
    fn move_absolute(&self, target_deg: f64, speed_rpm: i32) {
        self.begin_move(target_deg);
        log(Event::Target(self.side, target_deg, speed_rpm));
    }

    fn move_relative(&self, delta_deg: f64, speed_rpm: i32) {
        self.begin_move(delta_deg);
        log(Event::Relative(self.side, delta_deg, speed_rpm));
    }

    fn move_velocity(&self, speed_rpm: i32) {
        log(Event::Velocity(self.side, speed_rpm));
    }

    fn position(&self) -> f64 {
        let left = self.polls_left.load(Ordering::Relaxed);
        if left > 0 {
            self.polls_left.store(left - 1, Ordering::Relaxed);
            0.0
        } else {
            f64::from_bits(self.target_bits.load(Ordering::Relaxed))
        }
    }

    fn tare_position(&self) {}
}

/// An intake motor that records velocity transitions (not repeats, so a
/// polling controller re-issuing the same rpm stays quiet in the log).
pub struct MockIntake {
    last_rpm: AtomicI32,
}

impl MockIntake {
    pub const fn new() -> Self {
        Self {
            // sentinel so the first command, even 0, is recorded
            last_rpm: AtomicI32::new(i32::MIN),
        }
    }
}

impl Actuator for MockIntake {
    fn move_absolute(&self, _target_deg: f64, _speed_rpm: i32) {}

    fn move_relative(&self, _delta_deg: f64, _speed_rpm: i32) {}

    fn move_velocity(&self, speed_rpm: i32) {
        if self.last_rpm.swap(speed_rpm, Ordering::Relaxed) != speed_rpm {
            log(Event::IntakeVelocity(speed_rpm));
        }
    }

    fn position(&self) -> f64 {
        0.0
    }

    fn tare_position(&self) {}
}

/// A rotation sensor with a settable position and reset counting.
pub struct MockOdom {
    position: AtomicI32,
    reversed: AtomicBool,
    resets: AtomicU32,
}

impl MockOdom {
    pub const fn new() -> Self {
        Self {
            position: AtomicI32::new(0),
            reversed: AtomicBool::new(false),
            resets: AtomicU32::new(0),
        }
    }

    pub fn set_position(&self, ticks: i32) {
        self.position.store(ticks, Ordering::Relaxed);
    }

    pub fn resets(&self) -> u32 {
        self.resets.load(Ordering::Relaxed)
    }
}

impl Odometer for MockOdom {
    fn position(&self) -> i32 {
        self.position.load(Ordering::Relaxed)
    }

    fn reset_position(&self) {
        self.position.store(0, Ordering::Relaxed);
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    fn set_reversed(&self, reversed: bool) {
        self.reversed.store(reversed, Ordering::Relaxed);
    }

    fn reversed(&self) -> bool {
        self.reversed.load(Ordering::Relaxed)
    }
}
