use thiserror::Error;

/// Errors raised while talking to the Pi hardware.
#[derive(Debug, Error)]
pub enum CalibratorError {
    #[error("GPIO error: {0}")]
    Gpio(#[from] rppal::gpio::Error),
    #[error("PWM error: {0}")]
    Pwm(#[from] rppal::pwm::Error),
    #[error("Invalid PWM pin {0}. Use 12, 13, 18, or 19")]
    InvalidPwmPin(u8),
}

pub type Result<T> = std::result::Result<T, CalibratorError>;
