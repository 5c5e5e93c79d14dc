use std::time::{SystemTime, UNIX_EPOCH};

use crate::time::Clock;

/// Reads `SystemTime::now()` on every call.
///
/// This clock follows wall-clock adjustments, including NTP steps backwards,
/// which the generator reports as [`Error::ClockRegression`].
///
/// [`Error::ClockRegression`]: crate::Error::ClockRegression
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as i64,
            // Pre-1970 clocks report a negative offset.
            Err(err) => -(err.duration().as_millis() as i64),
        }
    }
}
