// This file is only compiled during tests

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    Low,
    High,
}

thread_local! {
    static MOCK_PINS: RefCell<HashMap<u8, Level>> = RefCell::new(HashMap::new());
}

pub struct Gpio;

impl Gpio {
    pub fn new() -> Result<Self> {
        Ok(Gpio)
    }

    pub fn get(&self, pin: u8) -> Result<Pin> {
        Ok(Pin { pin })
    }
}

pub struct Pin {
    pin: u8,
}

impl Pin {
    /// Pull-up: an untouched button reads High.
    pub fn into_input_pullup(self) -> InputPin {
        set_mock_pin_level(self.pin, Level::High);
        InputPin { pin: self.pin }
    }
}

pub struct InputPin {
    pin: u8,
}

impl InputPin {
    pub fn read(&self) -> Level {
        MOCK_PINS.with(|pins| pins.borrow().get(&self.pin).copied().unwrap_or(Level::High))
    }
}

// test helpers
pub fn set_mock_pin_level(pin: u8, level: Level) {
    MOCK_PINS.with(|pins| {
        pins.borrow_mut().insert(pin, level);
    });
}

/// Buttons are wired active low.
pub fn press_mock_button(pin: u8) {
    set_mock_pin_level(pin, Level::Low);
}

pub fn release_mock_button(pin: u8) {
    set_mock_pin_level(pin, Level::High);
}

pub fn reset_mock_pins() {
    MOCK_PINS.with(|pins| pins.borrow_mut().clear());
}
