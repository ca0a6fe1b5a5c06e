pub mod calibration;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod gpio_input;
pub mod logging;
pub mod maneuver;
pub mod pwm;
pub mod services;

// Re-export commonly used types
pub use calibration::{CalibrationController, CalibrationState};
pub use error::CalibratorError;
pub use gpio_input::Button;
pub use services::ServoPin;

#[cfg(test)]
pub(crate) mod mocks;
