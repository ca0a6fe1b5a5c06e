//! Hardware seams used by the calibration routine.
//!
//! The controller only sees these traits. Production code plugs in the
//! rppal backed [`ServoPair`](crate::pwm::ServoPair), a stdout display and
//! the system clock; tests plug in recording fakes.

use std::fmt;
use std::thread;
use std::time::Duration;

use crate::error::Result;

/// The two drive servos.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ServoPin {
    P1,
    P2,
}

impl fmt::Display for ServoPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServoPin::P1 => write!(f, "P1"),
            ServoPin::P2 => write!(f, "P2"),
        }
    }
}

/// Commands a servo position.
pub trait ActuatorDriver {
    /// `angle` is a position in degrees, 0..=180.
    fn write_output(&mut self, pin: ServoPin, angle: u8) -> Result<()>;
}

/// Best-effort operator feedback.
pub trait DisplayService {
    fn show_number(&mut self, n: i32);
    fn show_text(&mut self, text: &str);
}

/// Blocking pause.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Prints what a numeric display would show.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl DisplayService for ConsoleDisplay {
    fn show_number(&mut self, n: i32) {
        println!("▶ {}", n);
    }

    fn show_text(&mut self, text: &str) {
        println!("▶ {}", text);
    }
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
