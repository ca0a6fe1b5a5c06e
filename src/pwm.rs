use tracing::debug;

// Use rppal in production
#[cfg(not(test))]
use rppal::pwm::{Channel, Polarity, Pwm};

// Mock PWM for testing
#[cfg(test)]
use crate::mocks::mock_pwm::Pwm;

use crate::config::{
    SERVO_FREQUENCY_HZ, SERVO_MAX_ANGLE, SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US, SERVO_NEUTRAL,
    SERVO_P1_PWM_PIN, SERVO_P2_PWM_PIN,
};
use crate::error::{CalibratorError, Result};
use crate::services::{ActuatorDriver, ServoPin};

/// Duty cycle for a commanded angle.
/// 0° → 1000μs, 90° → 1500μs, 180° → 2000μs
pub fn duty_cycle_for(angle: u8) -> f64 {
    let clamped_angle = angle.min(SERVO_MAX_ANGLE);

    let pulse_us = SERVO_MIN_PULSE_US
        + (f64::from(clamped_angle) / f64::from(SERVO_MAX_ANGLE))
            * (SERVO_MAX_PULSE_US - SERVO_MIN_PULSE_US);

    // Period = 1/50Hz = 20ms = 20000μs
    let period_us = 1_000_000.0 / SERVO_FREQUENCY_HZ;
    pulse_us / period_us
}

#[cfg(not(test))]
fn open_channel(pin: u8) -> Result<Pwm> {
    let channel = match pin {
        12 | 18 => Channel::Pwm0,
        13 | 19 => Channel::Pwm1,
        _ => return Err(CalibratorError::InvalidPwmPin(pin)),
    };

    let pwm = Pwm::with_frequency(
        channel,
        SERVO_FREQUENCY_HZ,
        duty_cycle_for(SERVO_NEUTRAL),
        Polarity::Normal,
        true, // enabled
    )?;
    Ok(pwm)
}

#[cfg(test)]
fn open_channel(pin: u8) -> Result<Pwm> {
    match pin {
        12 | 13 | 18 | 19 => Pwm::new(pin, duty_cycle_for(SERVO_NEUTRAL)),
        _ => Err(CalibratorError::InvalidPwmPin(pin)),
    }
}

/// The two drive servos on the Pi's hardware PWM channels.
pub struct ServoPair {
    p1: Pwm,
    p2: Pwm,
}

impl ServoPair {
    /// P1 on GPIO 18 (PWM0), P2 on GPIO 19 (PWM1).
    pub fn new() -> Result<Self> {
        Self::with_pins(SERVO_P1_PWM_PIN, SERVO_P2_PWM_PIN)
    }

    /// Open both servos on custom GPIO pins. Both start at neutral.
    pub fn with_pins(p1_pin: u8, p2_pin: u8) -> Result<Self> {
        let p1 = open_channel(p1_pin)?;
        let p2 = open_channel(p2_pin)?;
        Ok(Self { p1, p2 })
    }

    /// Disable PWM output on both channels
    pub fn disable(&mut self) -> Result<()> {
        self.p1.disable()?;
        self.p2.disable()?;
        Ok(())
    }
}

impl ActuatorDriver for ServoPair {
    fn write_output(&mut self, pin: ServoPin, angle: u8) -> Result<()> {
        let duty_cycle = duty_cycle_for(angle);
        debug!(%pin, angle, duty_cycle, "servo write");

        match pin {
            ServoPin::P1 => self.p1.set_duty_cycle(duty_cycle)?,
            ServoPin::P2 => self.p2.set_duty_cycle(duty_cycle)?,
        }
        Ok(())
    }
}

impl Drop for ServoPair {
    fn drop(&mut self) {
        // Ensure PWM is disabled when dropped
        let _ = self.disable();
    }
}
