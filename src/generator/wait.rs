//! Busy-wait for the next millisecond on sequence exhaustion

use super::time::TimeSource;

/// Spin on the clock until it reads strictly past `from_timestamp`.
///
/// No sleeping and no yielding: the caller holds the generator lock and the
/// wait is bounded by the clock ticking over.
#[inline]
pub fn spin_until_after<T>(from_timestamp: i64, time: &T) -> i64
where
    T: TimeSource + ?Sized,
{
    loop {
        let now = time.current_millis();
        if now > from_timestamp {
            return now;
        }
        std::hint::spin_loop();
    }
}
