use std::thread;

use tracing::info;

use trim_rs::config::{BUTTON_POLL_INTERVAL, GPIO_BUTTON_A, GPIO_BUTTON_B};
use trim_rs::dispatch::InputDispatcher;
use trim_rs::gpio_input::ButtonPanel;
use trim_rs::logging::init_logging;
use trim_rs::pwm::ServoPair;
use trim_rs::services::{ConsoleDisplay, SystemClock};
use trim_rs::{Button, CalibrationController};

type Controller = CalibrationController<ServoPair, ConsoleDisplay, SystemClock>;

// Usage:
//  Press A or B    → robot drives a test line and comes back
//  A (veers left)  → tune P1        B (veers right) → tune P2
//  A / B           → nudge the output up / down, drive another test line
//  Every change of direction halves the nudge until it reaches 1.
//  The last number shown is the straight-line output.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    println!("Starting servo trim calibration...");

    let servos = ServoPair::new()?;
    let mut buttons = ButtonPanel::new()?;

    println!("GPIO initialized:");
    println!("  Button A (veers left):  GPIO {}", GPIO_BUTTON_A);
    println!("  Button B (veers right): GPIO {}", GPIO_BUTTON_B);

    let mut controller: Controller = CalibrationController::new(servos, ConsoleDisplay, SystemClock);

    let mut dispatcher: InputDispatcher<Controller> = InputDispatcher::new();
    dispatcher.on_pressed(Button::A, |c| c.on_veer_left_reported());
    dispatcher.on_pressed(Button::B, |c| c.on_veer_right_reported());

    loop {
        if let Some(button) = buttons.poll()
            && dispatcher.dispatch(button, &mut controller)
        {
            info!(state = %controller.state(), "calibration state");
        }

        // Debounce delay
        thread::sleep(BUTTON_POLL_INTERVAL);
    }
}
