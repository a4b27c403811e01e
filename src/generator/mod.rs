//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last timestamp and sequence, guarded by the generator lock
//! - `time` - Injectable wall-clock sources
//! - `wait` - Spin until the next millisecond
//! - `generate` - ID generation logic

mod generate;
mod state;
pub(crate) mod time;
mod wait;

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::config::{BitLayout, GeneratorConfig, TIMESTAMP_LEFT_SHIFT};
use crate::error::SnowflakeError;
use crate::extractor::{self, SnowflakeExtractor};

use state::State;
use time::{SystemClock, TimeSource};

/// Snowflake id generator.
///
/// Ids are laid out from the most significant bit as: sign bit (always 0),
/// 41 bits of milliseconds since the base epoch, data-center id, worker id,
/// sequence. The three low fields always share 22 bits.
///
/// Every call to [`next_id`](Self::next_id) runs under one lock, so a shared
/// instance can be used from many threads.
#[derive(Debug)]
pub struct SnowflakeIdGenerator<T = SystemClock> {
    state: Mutex<State>,
    layout: BitLayout,
    time: T,
    config: GeneratorConfig,
    extract: SnowflakeExtractor,
}

impl SnowflakeIdGenerator {
    /// Create with 5-bit data-center and worker fields and the default epoch
    pub fn new(data_center_id: u32, worker_id: u32) -> Result<Self, SnowflakeError> {
        let config = GeneratorConfig::builder()
            .data_center_id(data_center_id)
            .worker_id(worker_id)
            .build()?;
        Self::with_config(config)
    }

    /// Create with custom configuration, reading the system clock
    pub fn with_config(config: GeneratorConfig) -> Result<Self, SnowflakeError> {
        Self::with_time_source(config, SystemClock)
    }

    /// Absolute generation time in ms: `(id >> 22) + base_epoch`
    #[inline]
    pub fn parse_timestamp(id: i64, base_epoch: i64) -> i64 {
        extractor::parse_timestamp(id, base_epoch)
    }

    /// Data-center id of an id generated with `data_center_id_bits`
    #[inline]
    pub fn parse_data_center_id(id: i64, data_center_id_bits: u8) -> u32 {
        extractor::parse_data_center_id(id, data_center_id_bits)
    }

    /// Worker id of an id generated with the given widths
    #[inline]
    pub fn parse_worker_id(id: i64, data_center_id_bits: u8, worker_id_bits: u8) -> u32 {
        extractor::parse_worker_id(id, data_center_id_bits, worker_id_bits)
    }

    /// Sequence of an id generated with the given widths
    #[inline]
    pub fn parse_sequence(id: i64, data_center_id_bits: u8, worker_id_bits: u8) -> i64 {
        extractor::parse_sequence(id, data_center_id_bits, worker_id_bits)
    }
}

impl<T: TimeSource> SnowflakeIdGenerator<T> {
    pub const TIMESTAMP_LEFT_SHIFT: u8 = TIMESTAMP_LEFT_SHIFT;

    /// Create with custom configuration and clock
    pub fn with_time_source(config: GeneratorConfig, time: T) -> Result<Self, SnowflakeError> {
        let layout = config.layout()?;

        info!(
            data_center_id = config.data_center_id(),
            worker_id = config.worker_id(),
            data_center_id_bits = config.data_center_id_bits(),
            worker_id_bits = config.worker_id_bits(),
            sequence_bits = layout.sequence_bits,
            base_epoch = config.base_epoch(),
            "snowflake id generator initialized"
        );

        Ok(Self {
            state: Mutex::new(State::default()),
            layout,
            time,
            config,
            extract: SnowflakeExtractor::new(config),
        })
    }

    #[inline(always)]
    pub fn data_center_id(&self) -> u32 {
        self.config.data_center_id()
    }

    #[inline(always)]
    pub fn worker_id(&self) -> u32 {
        self.config.worker_id()
    }

    #[inline(always)]
    pub fn max_data_center_id(&self) -> u32 {
        self.layout.max_data_center_id
    }

    #[inline(always)]
    pub fn max_worker_id(&self) -> u32 {
        self.layout.max_worker_id
    }

    #[inline(always)]
    pub fn data_center_id_bits(&self) -> u8 {
        self.config.data_center_id_bits()
    }

    #[inline(always)]
    pub fn worker_id_bits(&self) -> u8 {
        self.config.worker_id_bits()
    }

    #[inline(always)]
    pub fn sequence_bits(&self) -> u8 {
        self.layout.sequence_bits
    }

    /// Largest sequence value per millisecond
    #[inline(always)]
    pub fn max_sequence(&self) -> i64 {
        self.layout.sequence_mask
    }

    #[inline(always)]
    pub fn base_epoch(&self) -> i64 {
        self.config.base_epoch()
    }

    /// Timestamp (ms since the Unix epoch) of the last issued id
    pub fn last_timestamp(&self) -> Option<i64> {
        self.lock_state().last_timestamp
    }

    /// Configuration the generator was built with
    #[inline(always)]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Decoder for ids from this generator
    #[inline(always)]
    pub fn extract(&self) -> &SnowflakeExtractor {
        &self.extract
    }

    pub fn time_source(&self) -> &T {
        &self.time
    }

    /// State is only ever replaced whole, so a poisoned lock still holds a valid value
    #[inline(always)]
    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, delta: i64, sequence: i64) -> i64 {
        (delta << TIMESTAMP_LEFT_SHIFT)
            | self.layout.data_center_prefix
            | self.layout.worker_prefix
            | sequence
    }
}
