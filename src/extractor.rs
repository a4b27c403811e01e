use chrono::{DateTime, Utc};

use crate::config::{mask, GeneratorConfig, TIMESTAMP_LEFT_SHIFT};

/// Absolute generation time in ms: `(id >> 22) + base_epoch`
#[inline(always)]
pub fn parse_timestamp(id: i64, base_epoch: i64) -> i64 {
    (id >> TIMESTAMP_LEFT_SHIFT) + base_epoch
}

/// Data-center id field. The width must match the one used at generation.
#[inline(always)]
pub fn parse_data_center_id(id: i64, data_center_id_bits: u8) -> u32 {
    let bits = data_center_id_bits.min(TIMESTAMP_LEFT_SHIFT);
    ((id >> (TIMESTAMP_LEFT_SHIFT - bits)) & mask(bits)) as u32
}

/// Worker id field. Both widths must match the ones used at generation.
#[inline(always)]
pub fn parse_worker_id(id: i64, data_center_id_bits: u8, worker_id_bits: u8) -> u32 {
    let shift = TIMESTAMP_LEFT_SHIFT
        .saturating_sub(data_center_id_bits)
        .saturating_sub(worker_id_bits);
    ((id >> shift) & mask(worker_id_bits.min(TIMESTAMP_LEFT_SHIFT))) as u32
}

/// Sequence field, the bits left below the worker id
#[inline(always)]
pub fn parse_sequence(id: i64, data_center_id_bits: u8, worker_id_bits: u8) -> i64 {
    let sequence_bits = TIMESTAMP_LEFT_SHIFT
        .saturating_sub(data_center_id_bits)
        .saturating_sub(worker_id_bits);
    id & mask(sequence_bits)
}

/// Fields of a decoded id
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SnowflakeParts {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub data_center_id: u32,
    pub worker_id: u32,
    pub sequence: i64,
}

/// Snowflake id component extractor bound to one configuration
#[derive(Debug, Copy, Clone)]
pub struct SnowflakeExtractor {
    config: GeneratorConfig,
}

impl SnowflakeExtractor {
    /// Create a new extractor for ids built with `config`
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[inline(always)]
    pub fn timestamp(&self, id: i64) -> i64 {
        parse_timestamp(id, self.config.base_epoch())
    }

    #[inline(always)]
    pub fn data_center_id(&self, id: i64) -> u32 {
        parse_data_center_id(id, self.config.data_center_id_bits())
    }

    #[inline(always)]
    pub fn worker_id(&self, id: i64) -> u32 {
        parse_worker_id(
            id,
            self.config.data_center_id_bits(),
            self.config.worker_id_bits(),
        )
    }

    #[inline(always)]
    pub fn sequence(&self, id: i64) -> i64 {
        parse_sequence(
            id,
            self.config.data_center_id_bits(),
            self.config.worker_id_bits(),
        )
    }

    /// Decompose an id into all of its fields
    #[inline]
    pub fn decompose(&self, id: i64) -> SnowflakeParts {
        SnowflakeParts {
            timestamp: self.timestamp(id),
            data_center_id: self.data_center_id(id),
            worker_id: self.worker_id(id),
            sequence: self.sequence(id),
        }
    }

    /// Generation instant as a UTC datetime
    pub fn datetime(&self, id: i64) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp(id))
    }
}
