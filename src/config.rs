use std::time::Duration;

// ** GPIO CONFIGURATION ** //
/// GPIO pin assignments for the two push buttons (pull-up, active low)
pub const GPIO_BUTTON_A: u8 = 23;
pub const GPIO_BUTTON_B: u8 = 24;
/// Main loop polling interval, doubles as a crude debounce
pub const BUTTON_POLL_INTERVAL: Duration = Duration::from_millis(20);

//  ** SERVO CONFIGURATION ** //

/// Hardware PWM pins for the two drive servos
/// - GPIO 18 (PWM0) drives P1
/// - GPIO 19 (PWM1) drives P2
pub const SERVO_P1_PWM_PIN: u8 = 18;
pub const SERVO_P2_PWM_PIN: u8 = 19;
/// Standard servo pulse width range (microseconds)
/// Most servos use 1000-2000μs, with 1500μs as center
pub const SERVO_MIN_PULSE_US: f64 = 1000.0;
pub const SERVO_MAX_PULSE_US: f64 = 2000.0;
/// Standard servo PWM frequency (Hz)
pub const SERVO_FREQUENCY_HZ: f64 = 50.0;
/// Commanded position range (degrees)
pub const SERVO_MAX_ANGLE: u8 = 180;
/// Continuous rotation servos stand still here
pub const SERVO_NEUTRAL: u8 = 90;
/// Output used by both servos to spin the robot in place
pub const SERVO_SPIN: u8 = 45;

// ** CALIBRATION CONFIGURATION ** //

/// Range of P1 outputs before the servo starts turning back
pub const P1_LIMITS: Limits = Limits { min: 0, max: 90 };
/// Range of P2 outputs before the servo starts turning back
pub const P2_LIMITS: Limits = Limits { min: 90, max: 180 };
pub const INITIAL_P1_OUTPUT: u8 = 0;
pub const INITIAL_P2_OUTPUT: u8 = 180;
pub const INITIAL_STEP_JUMP: u8 = 90;

// ** MANEUVER CONFIGURATION ** //

/// Spin rate at SERVO_SPIN, measure it with the turn-check binary
pub const DEGREES_PER_SECOND: f64 = 270.0;
pub const HALF_TURN_DEGREES: f64 = 180.0;
/// Time for the operator's hand to clear the robot
pub const HAND_CLEAR_PAUSE: Duration = Duration::from_millis(500);
/// Straight line drive per test
pub const TEST_DURATION: Duration = Duration::from_secs(5);
pub const SETTLE_PAUSE: Duration = Duration::from_secs(1);
pub const TURN_CHECK_REPEATS: u32 = 4;

// ** DISPLAY TEXT ** //
pub const START_PROMPT: &str = "Press A or B to begin";
pub const VEER_PROMPT: &str = "A if veers left, B if veers right";

/// Inclusive output range of one servo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub min: u8,
    pub max: u8,
}

impl Limits {
    /// Pin `value` into `[min, max]`.
    pub fn clamp(&self, value: i32) -> u8 {
        // min/max are u8, so the clamped value always fits
        value.clamp(i32::from(self.min), i32::from(self.max)) as u8
    }
}
