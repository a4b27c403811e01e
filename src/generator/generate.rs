//! ID generation logic
//!
//! `next_id()` reads the clock, compares it with the last issued timestamp
//! and builds the id, all under the generator lock.

use tracing::{debug, warn};

use crate::config::{mask, TIMESTAMP_BITS};
use crate::error::SnowflakeError;

use super::state::{State, Tick};
use super::time::TimeSource;
use super::wait::spin_until_after;
use super::SnowflakeIdGenerator;

impl<T: TimeSource> SnowflakeIdGenerator<T> {
    /// Generate a new Snowflake id.
    ///
    /// Fails with [`SnowflakeError::ClockMovedBackwards`] if the clock reads
    /// earlier than the last issued id; the generator state is left as it was.
    /// When the sequence runs out within one millisecond the call spins, still
    /// holding the lock, until the clock ticks over.
    pub fn next_id(&self) -> Result<i64, SnowflakeError> {
        let mut state = self.lock_state();
        let now = self.time.current_millis();

        let (timestamp, sequence) = match state.classify(now) {
            Tick::Regressed(delta) => {
                warn!(
                    delta,
                    last_timestamp = now + delta,
                    "clock moved backwards, refusing to generate id"
                );
                return Err(SnowflakeError::ClockMovedBackwards { delta });
            }
            Tick::Same => {
                let sequence = (state.sequence + 1) & self.layout.sequence_mask;
                if sequence == 0 {
                    debug!(timestamp = now, "sequence exhausted, waiting for next millisecond");
                    (spin_until_after(now, &self.time), 0)
                } else {
                    (now, sequence)
                }
            }
            Tick::Advanced => (now, 0),
        };

        let delta = self.timestamp_delta(timestamp)?;
        *state = State {
            last_timestamp: Some(timestamp),
            sequence,
        };

        Ok(self.assemble_id(delta, sequence))
    }

    /// Milliseconds since the base epoch, if they fit the timestamp field
    #[inline(always)]
    fn timestamp_delta(&self, timestamp: i64) -> Result<i64, SnowflakeError> {
        let base_epoch = self.config.base_epoch();
        match timestamp.checked_sub(base_epoch) {
            Some(delta) if (0..=mask(TIMESTAMP_BITS)).contains(&delta) => Ok(delta),
            _ => Err(SnowflakeError::TimestampOutOfRange {
                timestamp,
                base_epoch,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{FixedClock, ScriptedClock};
    use crate::{GeneratorConfig, SnowflakeError, SnowflakeIdGenerator};

    const EPOCH: i64 = 1_514_736_000_000;

    fn config(data_center_id: u32, worker_id: u32) -> GeneratorConfig {
        GeneratorConfig::builder()
            .data_center_id(data_center_id)
            .worker_id(worker_id)
            .base_epoch(EPOCH)
            .build()
            .unwrap()
    }

    #[test]
    fn test_first_id_starts_at_sequence_zero() {
        let clock = FixedClock::new(EPOCH + 5);
        let g = SnowflakeIdGenerator::with_time_source(config(0, 0), &clock).unwrap();

        assert_eq!(g.next_id().unwrap(), 5 << 22);
        assert_eq!(g.last_timestamp(), Some(EPOCH + 5));
    }

    #[test]
    fn test_sequence_resets_when_clock_advances() {
        let clock = ScriptedClock::new(vec![EPOCH + 10, EPOCH + 10, EPOCH + 11]);
        let g = SnowflakeIdGenerator::with_time_source(config(0, 0), &clock).unwrap();

        let a = g.next_id().unwrap();
        let b = g.next_id().unwrap();
        let c = g.next_id().unwrap();

        assert_eq!(g.extract().sequence(a), 0);
        assert_eq!(g.extract().sequence(b), 1);
        assert_eq!(g.extract().sequence(c), 0);
        assert_eq!(g.extract().timestamp(c), EPOCH + 11);
    }

    #[test]
    fn test_clock_before_epoch_is_rejected() {
        let clock = FixedClock::new(EPOCH - 1);
        let g = SnowflakeIdGenerator::with_time_source(config(0, 0), &clock).unwrap();

        assert_eq!(
            g.next_id(),
            Err(SnowflakeError::TimestampOutOfRange {
                timestamp: EPOCH - 1,
                base_epoch: EPOCH
            })
        );
        assert_eq!(g.last_timestamp(), None);
    }

    #[test]
    fn test_timestamp_past_41_bits_is_rejected() {
        let clock = FixedClock::new(EPOCH + (1 << 41));
        let g = SnowflakeIdGenerator::with_time_source(config(0, 0), &clock).unwrap();
        assert!(matches!(
            g.next_id(),
            Err(SnowflakeError::TimestampOutOfRange { .. })
        ));

        clock.set(EPOCH + (1 << 41) - 1);
        let id = g.next_id().unwrap();
        assert!(id > 0, "sign bit must stay clear");
    }
}
