// This file is only compiled during tests

use std::time::Duration;

use crate::error::{CalibratorError, Result};
use crate::services::{ActuatorDriver, Clock, DisplayService, ServoPin};

/// Remembers every servo write in order.
#[derive(Debug, Default)]
pub struct RecordingActuator {
    pub writes: Vec<(ServoPin, u8)>,
}

impl ActuatorDriver for RecordingActuator {
    fn write_output(&mut self, pin: ServoPin, angle: u8) -> Result<()> {
        self.writes.push((pin, angle));
        Ok(())
    }
}

/// Every write fails, like a servo on an unwired PWM pin.
pub struct FailingActuator;

impl ActuatorDriver for FailingActuator {
    fn write_output(&mut self, _pin: ServoPin, _angle: u8) -> Result<()> {
        Err(CalibratorError::InvalidPwmPin(0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Number(i32),
    Text(String),
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub shown: Vec<Shown>,
}

impl DisplayService for RecordingDisplay {
    fn show_number(&mut self, n: i32) {
        self.shown.push(Shown::Number(n));
    }

    fn show_text(&mut self, text: &str) {
        self.shown.push(Shown::Text(text.to_string()));
    }
}

/// Records pauses instead of blocking.
#[derive(Debug, Default)]
pub struct FakeClock {
    pub slept: Vec<Duration>,
}

impl Clock for FakeClock {
    fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
    }
}
