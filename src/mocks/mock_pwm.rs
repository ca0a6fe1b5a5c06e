// This file is only compiled during tests

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

thread_local! {
    static MOCK_PWM_DUTY: RefCell<HashMap<u8, f64>> = RefCell::new(HashMap::new());
    static MOCK_PWM_ENABLED: RefCell<HashMap<u8, bool>> = RefCell::new(HashMap::new());
}

pub struct Pwm {
    pin: u8,
}

impl Pwm {
    pub fn new(pin: u8, duty_cycle: f64) -> Result<Self> {
        MOCK_PWM_DUTY.with(|duty| {
            duty.borrow_mut().insert(pin, duty_cycle);
        });
        MOCK_PWM_ENABLED.with(|enabled| {
            enabled.borrow_mut().insert(pin, true);
        });
        Ok(Pwm { pin })
    }

    pub fn set_duty_cycle(&self, duty_cycle: f64) -> Result<()> {
        MOCK_PWM_DUTY.with(|duty| {
            duty.borrow_mut().insert(self.pin, duty_cycle);
        });
        println!(
            "[Mock PWM {}] Duty cycle set to {:.4}",
            self.pin, duty_cycle
        );
        Ok(())
    }

    pub fn disable(&self) -> Result<()> {
        MOCK_PWM_ENABLED.with(|enabled| {
            enabled.borrow_mut().insert(self.pin, false);
        });
        println!("[Mock PWM {}] Disabled", self.pin);
        Ok(())
    }
}

// Test helpers
pub fn get_mock_duty_cycle(pin: u8) -> Option<f64> {
    MOCK_PWM_DUTY.with(|duty| duty.borrow().get(&pin).copied())
}

pub fn is_mock_pwm_enabled(pin: u8) -> bool {
    MOCK_PWM_ENABLED.with(|enabled| enabled.borrow().get(&pin).copied().unwrap_or(false))
}

pub fn reset_mock_pwm() {
    MOCK_PWM_DUTY.with(|duty| duty.borrow_mut().clear());
    MOCK_PWM_ENABLED.with(|enabled| enabled.borrow_mut().clear());
}
