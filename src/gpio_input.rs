use std::thread;
use std::time::Duration;

use tracing::debug;

// Use rppal in production
#[cfg(not(test))]
use rppal::gpio::{Gpio, InputPin, Level};

#[cfg(test)]
// This is only used in testing, not compiled in release.
use crate::mocks::mock_gpio::{Gpio, InputPin, Level};

use crate::config::{GPIO_BUTTON_A, GPIO_BUTTON_B};
use crate::error::Result;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// The two operator buttons. A reports a left veer, B a right veer.
pub enum Button {
    A,
    B,
}

struct TrackedButton {
    button: Button,
    pin: InputPin,
    last_level: Level,
}

impl TrackedButton {
    /// True on the High → Low edge.
    fn pressed(&mut self) -> bool {
        let level = self.pin.read();
        if level == self.last_level {
            return false;
        }
        self.last_level = level;
        level == Level::Low
    }
}

/// Two pull-up push buttons, active low.
pub struct ButtonPanel {
    buttons: [TrackedButton; 2],
}

impl ButtonPanel {
    pub fn new() -> Result<Self> {
        Self::with_pins(GPIO_BUTTON_A, GPIO_BUTTON_B)
    }

    pub fn with_pins(button_a_pin: u8, button_b_pin: u8) -> Result<Self> {
        let gpio = Gpio::new()?;

        let button_a = gpio.get(button_a_pin)?.into_input_pullup();
        let button_b = gpio.get(button_b_pin)?.into_input_pullup();

        // let the pull-ups settle
        thread::sleep(Duration::from_millis(100));

        Ok(Self {
            buttons: [
                TrackedButton {
                    button: Button::A,
                    last_level: button_a.read(),
                    pin: button_a,
                },
                TrackedButton {
                    button: Button::B,
                    last_level: button_b.read(),
                    pin: button_b,
                },
            ],
        })
    }

    /// Report at most one new press. A is checked first; a press of B in
    /// the same poll is picked up by the next call.
    pub fn poll(&mut self) -> Option<Button> {
        for tracked in self.buttons.iter_mut() {
            if tracked.pressed() {
                debug!(button = ?tracked.button, "button pressed");
                return Some(tracked.button);
            }
        }
        None
    }
}
