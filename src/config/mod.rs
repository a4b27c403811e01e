//! Configuration for the Snowflake generator

mod builder;

pub use builder::GeneratorConfigBuilder;
pub use builder::{DEFAULT_BASE_EPOCH, DEFAULT_DATA_CENTER_ID_BITS, DEFAULT_WORKER_ID_BITS};

use crate::error::ConfigError;

/// Bits below the timestamp, shared by data-center id, worker id and sequence
pub const TIMESTAMP_LEFT_SHIFT: u8 = 22;

/// Bits available to the timestamp delta (the sign bit stays clear)
pub const TIMESTAMP_BITS: u8 = 63 - TIMESTAMP_LEFT_SHIFT;

/// Construction parameters for a `SnowflakeIdGenerator`
///
/// A config is only checked when a generator is built from it (or when the
/// builder finishes), so a deserialized config is validated the same way as
/// one assembled in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct GeneratorConfig {
    pub(crate) data_center_id: u32,
    pub(crate) worker_id: u32,
    pub(crate) data_center_id_bits: u8,
    pub(crate) worker_id_bits: u8,
    pub(crate) base_epoch: i64,
}

impl GeneratorConfig {
    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn data_center_id(&self) -> u32 {
        self.data_center_id
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> u32 {
        self.worker_id
    }

    #[inline(always)]
    pub const fn data_center_id_bits(&self) -> u8 {
        self.data_center_id_bits
    }

    #[inline(always)]
    pub const fn worker_id_bits(&self) -> u8 {
        self.worker_id_bits
    }

    /// Bits left for the per-millisecond sequence, 0 if the widths are invalid
    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        TIMESTAMP_LEFT_SHIFT
            .saturating_sub(self.data_center_id_bits)
            .saturating_sub(self.worker_id_bits)
    }

    #[inline(always)]
    pub const fn base_epoch(&self) -> i64 {
        self.base_epoch
    }

    /// Check every layout invariant and precompute the masks
    pub(crate) fn layout(&self) -> Result<BitLayout, ConfigError> {
        if self.data_center_id_bits == 0 || self.worker_id_bits == 0 {
            return Err(ConfigError::ZeroBitWidth {
                data_center_id_bits: self.data_center_id_bits,
                worker_id_bits: self.worker_id_bits,
            });
        }

        let sum = u16::from(self.data_center_id_bits) + u16::from(self.worker_id_bits);
        if sum >= u16::from(TIMESTAMP_LEFT_SHIFT) {
            return Err(ConfigError::BitWidthOverflow {
                sum,
                limit: TIMESTAMP_LEFT_SHIFT,
            });
        }

        let max_data_center_id = mask(self.data_center_id_bits) as u32;
        if self.data_center_id > max_data_center_id {
            return Err(ConfigError::DataCenterIdOutOfRange {
                data_center_id: self.data_center_id,
                max: max_data_center_id,
            });
        }

        let max_worker_id = mask(self.worker_id_bits) as u32;
        if self.worker_id > max_worker_id {
            return Err(ConfigError::WorkerIdOutOfRange {
                worker_id: self.worker_id,
                max: max_worker_id,
            });
        }

        let sequence_bits = self.sequence_bits();
        Ok(BitLayout {
            sequence_bits,
            max_data_center_id,
            max_worker_id,
            sequence_mask: mask(sequence_bits),
            data_center_prefix: i64::from(self.data_center_id)
                << (sequence_bits + self.worker_id_bits),
            worker_prefix: i64::from(self.worker_id) << sequence_bits,
        })
    }
}

impl Default for GeneratorConfig {
    /// Data-center 0, worker 0, 5 + 5 bit widths and the default epoch
    fn default() -> Self {
        Self {
            data_center_id: 0,
            worker_id: 0,
            data_center_id_bits: DEFAULT_DATA_CENTER_ID_BITS,
            worker_id_bits: DEFAULT_WORKER_ID_BITS,
            base_epoch: DEFAULT_BASE_EPOCH,
        }
    }
}

/// Low `bits` bits set
#[inline(always)]
pub(crate) const fn mask(bits: u8) -> i64 {
    !(-1i64 << bits)
}

/// Layout resolved from a validated config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BitLayout {
    pub(crate) sequence_bits: u8,
    pub(crate) max_data_center_id: u32,
    pub(crate) max_worker_id: u32,
    pub(crate) sequence_mask: i64,
    /// Data-center id already shifted into place
    pub(crate) data_center_prefix: i64,
    /// Worker id already shifted into place
    pub(crate) worker_prefix: i64,
}
