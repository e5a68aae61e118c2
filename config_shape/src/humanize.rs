//! Human-readable execution times.
//!
//! The rendering is fixed: `" in {H} hours {M} minutes and {S} seconds"` with
//! seconds printed to two decimal places. Units are never singularised.

use std::fmt;
use std::time::Duration;

use tracing::warn;

/// An elapsed time split into whole hours, whole minutes and remaining
/// seconds.
///
/// # Examples
///
/// ```rust
/// use config_shape::ExecutionTime;
/// use std::time::Duration;
///
/// let elapsed = ExecutionTime::from(Duration::from_secs(9460));
/// assert_eq!(elapsed.hours(), 2);
/// assert_eq!(elapsed.minutes(), 37);
/// assert_eq!(elapsed.to_string(), " in 2 hours 37 minutes and 40.00 seconds");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExecutionTime {
    hours: u128,
    minutes: u64,
    seconds: Duration,
}

/// `2^128`, the first float whose whole seconds no longer fit `u128`.
const WHOLE_SECONDS_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

impl ExecutionTime {
    /// Decompose a number of seconds.
    ///
    /// Values past [`Duration::MAX`] are split exactly, since floats that
    /// large carry no fractional part. Negative or non-finite input, and input
    /// of `2^128` seconds or more, is reported as zero.
    #[must_use]
    pub fn from_secs_f64(seconds: f64) -> Self {
        match Duration::try_from_secs_f64(seconds) {
            Ok(elapsed) => Self::from(elapsed),
            Err(_) if seconds > 0.0 && seconds < WHOLE_SECONDS_LIMIT => {
                Self::from_whole_seconds(whole_seconds(seconds), 0)
            }
            Err(err) => {
                warn!(seconds, error = %err, "execution time out of range; reporting zero");
                Self::from(Duration::ZERO)
            }
        }
    }

    /// Whole hours.
    #[must_use]
    pub const fn hours(&self) -> u128 {
        self.hours
    }

    /// Whole minutes remaining after the hours, `0..60`.
    #[must_use]
    pub const fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Seconds remaining after the minutes, below one minute.
    #[must_use]
    pub const fn seconds(&self) -> Duration {
        self.seconds
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "a remainder modulo 60 fits in u64"
    )]
    const fn from_whole_seconds(total: u128, subsec_nanos: u32) -> Self {
        let whole_minutes = total.div_euclid(60);
        Self {
            hours: whole_minutes.div_euclid(60),
            minutes: whole_minutes.rem_euclid(60) as u64,
            seconds: Duration::new(total.rem_euclid(60) as u64, subsec_nanos),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "callers pass finite, positive, integral values below 2^128"
)]
const fn whole_seconds(seconds: f64) -> u128 {
    seconds as u128
}

impl From<Duration> for ExecutionTime {
    fn from(elapsed: Duration) -> Self {
        Self::from_whole_seconds(u128::from(elapsed.as_secs()), elapsed.subsec_nanos())
    }
}

/// Seconds are rounded to hundredths only when printed, so exact-half inputs
/// follow the binary value of the remainder (`1234.565` prints `34.56`) and a
/// remainder just under a minute can print as `60.00`.
impl fmt::Display for ExecutionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " in {} hours {} minutes and {:.2} seconds",
            self.hours,
            self.minutes,
            self.seconds.as_secs_f64()
        )
    }
}

/// Render `seconds` as `" in {H} hours {M} minutes and {S} seconds"`.
///
/// # Examples
///
/// ```rust
/// use config_shape::humanize_execution_time;
///
/// assert_eq!(humanize_execution_time(0.3254), " in 0 hours 0 minutes and 0.33 seconds");
/// ```
#[must_use]
pub fn humanize_execution_time(seconds: f64) -> String {
    ExecutionTime::from_secs_f64(seconds).to_string()
}
