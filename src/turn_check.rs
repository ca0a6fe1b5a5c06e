use std::thread;
use std::time::Duration;

use trim_rs::config::{DEGREES_PER_SECOND, SETTLE_PAUSE, TURN_CHECK_REPEATS};
use trim_rs::logging::init_logging;
use trim_rs::maneuver::{turn_around, turn_duration};
use trim_rs::pwm::ServoPair;
use trim_rs::services::SystemClock;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║     Turn-around Check                                ║");
    println!("╚══════════════════════════════════════════════════════╝\n");

    println!("Instructions:");
    println!("1. Put the robot on the floor with a mark under its nose");
    println!("2. It will spin in place {} times (an even count ends where it started)", TURN_CHECK_REPEATS);
    println!("3. Every spin should be exactly a half turn");
    println!("4. If not, adjust DEGREES_PER_SECOND in config.rs\n");

    println!(
        "Assuming {:.0}°/s → {:.3}s per half turn",
        DEGREES_PER_SECOND,
        turn_duration().as_secs_f64()
    );
    println!("Starting in 5 seconds...\n");
    thread::sleep(Duration::from_secs(5));

    let mut servos = ServoPair::new()?;
    let mut clock = SystemClock;

    for turn in 1..=TURN_CHECK_REPEATS {
        println!("Turn {}/{}", turn, TURN_CHECK_REPEATS);
        turn_around(&mut servos, &mut clock);
        thread::sleep(SETTLE_PAUSE);
    }

    println!("\nDone. Check the robot is back over the mark.");
    Ok(())
}
