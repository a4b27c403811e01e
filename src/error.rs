use thiserror::Error;

/// Reasons a generator configuration is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Data-center and worker fields must each take at least one bit
    #[error("dataCenterIdBits ({data_center_id_bits}) and workerIdBits ({worker_id_bits}) must both be at least 1")]
    ZeroBitWidth {
        data_center_id_bits: u8,
        worker_id_bits: u8,
    },
    /// Data-center and worker fields leave no room for the sequence
    #[error("dataCenterIdBits + workerIdBits can't be greater than or equal to {limit}, got {sum}")]
    BitWidthOverflow { sum: u16, limit: u8 },
    /// Data-center id does not fit its field
    #[error("dataCenterId {data_center_id} can't be greater than {max}")]
    DataCenterIdOutOfRange { data_center_id: u32, max: u32 },
    /// Worker id does not fit its field
    #[error("workerId {worker_id} can't be greater than {max}")]
    WorkerIdOutOfRange { worker_id: u32, max: u32 },
}

/// Represents errors that can occur during Snowflake id operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Construction parameters violate the bit layout
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// Error when clock moves backwards (system time issue)
    #[error("Clock moved backwards. Refusing to generate id for {delta} milliseconds")]
    ClockMovedBackwards { delta: i64 },
    /// The clock reads before the base epoch, or too far past it for 41 bits
    #[error("Timestamp {timestamp} is out of range for base epoch {base_epoch}")]
    TimestampOutOfRange { timestamp: i64, base_epoch: i64 },
}
