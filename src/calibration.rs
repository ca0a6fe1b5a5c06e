//! Interactive trim calibration for the two drive servos.
//!
//! The operator drives the robot forward, watches which way it veers and
//! reports it with button A (left) or button B (right). Each report nudges
//! one servo output by the current step. The step halves (rounding up)
//! every time the reported direction reverses, so the output converges on
//! the value where the robot drives straight.
//!
//! ```text
//!  press 1      → forward test, ask for veer direction
//!  press 2  A   → tune P1        B → tune P2
//!  press 3+ A   → output += step B → output -= step, then forward test
//! ```

use std::fmt;

use tracing::info;

use crate::config::{
    INITIAL_P1_OUTPUT, INITIAL_P2_OUTPUT, INITIAL_STEP_JUMP, P1_LIMITS, P2_LIMITS, SERVO_NEUTRAL,
    START_PROMPT, VEER_PROMPT,
};
use crate::gpio_input::Button;
use crate::maneuver::{forward_test, write_both};
use crate::services::{ActuatorDriver, Clock, DisplayService, ServoPin};

/// Sign of the last applied adjustment.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VerticalDirection {
    Up,
    Down,
}

impl VerticalDirection {
    pub fn sign(self) -> i32 {
        match self {
            VerticalDirection::Up => 1,
            VerticalDirection::Down => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            VerticalDirection::Up => VerticalDirection::Down,
            VerticalDirection::Down => VerticalDirection::Up,
        }
    }
}

impl From<Button> for VerticalDirection {
    fn from(button: Button) -> Self {
        match button {
            Button::A => VerticalDirection::Up,
            Button::B => VerticalDirection::Down,
        }
    }
}

/// Where the session is, derived from [`CalibrationState`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CalibrationPhase {
    AwaitingFirstTest,
    AwaitingPinSelection,
    Adjusting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationState {
    pub p1_output: u8,
    pub p2_output: u8,
    pub step_jump: u8,
    pub vertical_direction: Option<VerticalDirection>,
    pub pin_to_change: Option<ServoPin>,
    pub first_test: bool,
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self {
            p1_output: INITIAL_P1_OUTPUT,
            p2_output: INITIAL_P2_OUTPUT,
            step_jump: INITIAL_STEP_JUMP,
            vertical_direction: None,
            pin_to_change: None,
            first_test: true,
        }
    }
}

impl CalibrationState {
    pub fn phase(&self) -> CalibrationPhase {
        if self.first_test {
            CalibrationPhase::AwaitingFirstTest
        } else if self.pin_to_change.is_none() {
            CalibrationPhase::AwaitingPinSelection
        } else {
            CalibrationPhase::Adjusting
        }
    }

    /// Adopt `direction` on the first adjustment; afterwards a reversal
    /// halves the step (rounding up, so it bottoms out at 1).
    fn update_vertical_direction(&mut self, direction: VerticalDirection) {
        match self.vertical_direction {
            None => self.vertical_direction = Some(direction),
            Some(current) if current != direction => {
                self.step_jump = self.step_jump.div_ceil(2);
                self.vertical_direction = Some(current.reversed());
            }
            Some(_) => {}
        }
    }

    /// Move the selected pin by one step and return its new value.
    fn update_pin_value(&mut self) -> Option<(ServoPin, u8)> {
        let pin = self.pin_to_change?;
        let sign = self.vertical_direction?.sign();
        let delta = sign * i32::from(self.step_jump);

        let value = match pin {
            ServoPin::P1 => {
                self.p1_output = P1_LIMITS.clamp(i32::from(self.p1_output) + delta);
                self.p1_output
            }
            ServoPin::P2 => {
                // Base is P1's output, not P2's. Kept as the routine has always
                // behaved until someone confirms P2 should track itself.
                self.p2_output = P2_LIMITS.clamp(i32::from(self.p1_output) + delta);
                self.p2_output
            }
        };
        Some((pin, value))
    }
}

impl fmt::Display for CalibrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P1={} P2={} step={} direction={} tuning={}",
            self.p1_output,
            self.p2_output,
            self.step_jump,
            match self.vertical_direction {
                Some(VerticalDirection::Up) => "up",
                Some(VerticalDirection::Down) => "down",
                None => "-",
            },
            match self.pin_to_change {
                Some(pin) => pin.to_string(),
                None => "-".to_string(),
            }
        )
    }
}

/// Owns the calibration state and the hardware it drives.
pub struct CalibrationController<A, D, C> {
    state: CalibrationState,
    actuator: A,
    display: D,
    clock: C,
}

impl<A, D, C> CalibrationController<A, D, C>
where
    A: ActuatorDriver,
    D: DisplayService,
    C: Clock,
{
    /// Stop both servos and prompt the operator.
    pub fn new(mut actuator: A, mut display: D, clock: C) -> Self {
        write_both(&mut actuator, SERVO_NEUTRAL, SERVO_NEUTRAL);
        display.show_text(START_PROMPT);

        Self {
            state: CalibrationState::default(),
            actuator,
            display,
            clock,
        }
    }

    pub fn state(&self) -> &CalibrationState {
        &self.state
    }

    /// Button A: the robot veered left on the last test.
    pub fn on_veer_left_reported(&mut self) {
        self.handle_press(Button::A);
    }

    /// Button B: the robot veered right on the last test.
    pub fn on_veer_right_reported(&mut self) {
        self.handle_press(Button::B);
    }

    pub fn handle_press(&mut self, button: Button) {
        match self.state.phase() {
            CalibrationPhase::AwaitingFirstTest => {
                info!(?button, "running first forward test");
                self.run_forward_test();
                self.state.first_test = false;
                self.display.show_text(VEER_PROMPT);
            }
            CalibrationPhase::AwaitingPinSelection => {
                let (pin, shown) = match button {
                    Button::A => (ServoPin::P1, P1_LIMITS.min),
                    Button::B => (ServoPin::P2, P2_LIMITS.max),
                };
                self.state.pin_to_change = Some(pin);
                info!(%pin, "selected servo to tune");
                self.display.show_number(i32::from(shown));
            }
            CalibrationPhase::Adjusting => {
                self.state.update_vertical_direction(button.into());
                if let Some((pin, value)) = self.state.update_pin_value() {
                    info!(%pin, value, step = self.state.step_jump, "adjusted output");
                    self.display.show_number(i32::from(value));
                }
                self.run_forward_test();
            }
        }
    }

    fn run_forward_test(&mut self) {
        forward_test(
            &mut self.actuator,
            &mut self.clock,
            self.state.p1_output,
            self.state.p2_output,
        );
    }
}
