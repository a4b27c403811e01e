//! Time sources for Snowflake id generation
//!
//! The generator reads the clock through [`TimeSource`] so tests can drive
//! time by hand instead of sleeping.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A millisecond wall clock.
///
/// # Example
///
/// ```
/// use snowflake_idgen::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Milliseconds since the Unix epoch
    fn current_millis(&self) -> i64;
}

/// Wall clock backed by [`SystemTime`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        unix_time_ms()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
/// A clock set before 1970 reads as 0.
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as i64)
}
