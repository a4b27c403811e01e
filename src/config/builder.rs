//! GeneratorConfig builder for constructing configuration

use super::GeneratorConfig;
use crate::error::SnowflakeError;

/// Default configuration values
pub const DEFAULT_DATA_CENTER_ID_BITS: u8 = 5;
pub const DEFAULT_WORKER_ID_BITS: u8 = 5;
/// 2018-01-01 00:00:00 UTC+8. Fixed once ids are in use; changing it breaks ordering.
pub const DEFAULT_BASE_EPOCH: i64 = 1_514_736_000_000;

/// Builder for GeneratorConfig
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Create a new GeneratorConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    pub const fn data_center_id(mut self, id: u32) -> Self {
        self.config.data_center_id = id;
        self
    }

    pub const fn worker_id(mut self, id: u32) -> Self {
        self.config.worker_id = id;
        self
    }

    /// Set the number of bits for the data-center id.
    /// Sequence bits become `22 - data_center_id_bits - worker_id_bits`.
    pub const fn data_center_id_bits(mut self, bits: u8) -> Self {
        self.config.data_center_id_bits = bits;
        self
    }

    /// Set the number of bits for the worker id
    pub const fn worker_id_bits(mut self, bits: u8) -> Self {
        self.config.worker_id_bits = bits;
        self
    }

    /// Set the base epoch in milliseconds since the Unix epoch
    pub const fn base_epoch(mut self, epoch: i64) -> Self {
        self.config.base_epoch = epoch;
        self
    }

    /// Validate and build the final GeneratorConfig
    pub fn build(self) -> Result<GeneratorConfig, SnowflakeError> {
        self.config.layout()?;
        Ok(self.config)
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
