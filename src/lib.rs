//! # snowflake-idgen
//!
//! A Snowflake-style 64-bit distributed id generator.
//!
//! Ids are `i64` values laid out as
//! `0 | 41-bit ms since base epoch | data-center id | worker id | sequence`,
//! where the last three fields share 22 bits (5 + 5 + 12 by default).
//!
//! - 📈 Time-sorted
//! - 🔒 Thread-safe (one lock per generator)
//! - 🌐 Distributed-ready: distinct `(data_center_id, worker_id)` pairs never collide
//!
//! ```
//! use snowflake_idgen::SnowflakeIdGenerator;
//!
//! let generator = SnowflakeIdGenerator::new(1, 2).unwrap();
//! let id = generator.next_id().unwrap();
//!
//! assert_eq!(SnowflakeIdGenerator::parse_data_center_id(id, 5), 1);
//! assert_eq!(SnowflakeIdGenerator::parse_worker_id(id, 5, 5), 2);
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
mod simple;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{
    GeneratorConfig, GeneratorConfigBuilder, DEFAULT_BASE_EPOCH, DEFAULT_DATA_CENTER_ID_BITS,
    DEFAULT_WORKER_ID_BITS, TIMESTAMP_BITS, TIMESTAMP_LEFT_SHIFT,
};
pub use error::{ConfigError, SnowflakeError};
pub use extractor::{
    parse_data_center_id, parse_sequence, parse_timestamp, parse_worker_id, SnowflakeExtractor,
    SnowflakeParts,
};
pub use generator::time::{unix_time_ms, SystemClock, TimeSource};
pub use generator::SnowflakeIdGenerator;
pub use simple::SimpleIdGenerator;
