use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{
    DEGREES_PER_SECOND, HALF_TURN_DEGREES, HAND_CLEAR_PAUSE, SERVO_NEUTRAL, SERVO_SPIN,
    SETTLE_PAUSE, TEST_DURATION,
};
use crate::services::{ActuatorDriver, Clock, ServoPin};

/// Time spent spinning at SERVO_SPIN to face the other way.
pub fn turn_duration() -> Duration {
    Duration::from_secs_f64(HALF_TURN_DEGREES / DEGREES_PER_SECOND)
}

/// Write both servos. Hardware failures are logged and skipped.
pub fn write_both<A: ActuatorDriver>(actuator: &mut A, p1: u8, p2: u8) {
    for (pin, angle) in [(ServoPin::P1, p1), (ServoPin::P2, p2)] {
        if let Err(e) = actuator.write_output(pin, angle) {
            warn!(%pin, angle, error = %e, "servo write failed");
        }
    }
}

/// Spin in place for half a turn, then stop.
pub fn turn_around<A: ActuatorDriver, C: Clock>(actuator: &mut A, clock: &mut C) {
    let time_to_wait = turn_duration();
    debug!(?time_to_wait, "turning around");

    write_both(actuator, SERVO_SPIN, SERVO_SPIN);
    clock.sleep(time_to_wait);

    write_both(actuator, SERVO_NEUTRAL, SERVO_NEUTRAL);
}

/// Drive straight at the given outputs, then come back to the start line
/// facing the original direction.
pub fn forward_test<A: ActuatorDriver, C: Clock>(actuator: &mut A, clock: &mut C, p1: u8, p2: u8) {
    debug!(p1, p2, "forward test");

    clock.sleep(HAND_CLEAR_PAUSE);
    turn_around(actuator, clock);

    write_both(actuator, p1, p2);
    clock.sleep(TEST_DURATION);

    // stop
    write_both(actuator, SERVO_NEUTRAL, SERVO_NEUTRAL);

    // we test on a line
    clock.sleep(SETTLE_PAUSE);
    turn_around(actuator, clock);
    clock.sleep(SETTLE_PAUSE);
}
