//! Human-readable string ids: local time plus a random suffix

use chrono::{DateTime, Local, TimeZone};
use rand::distr::Alphanumeric;
use rand::Rng;
use std::fmt::Display;

/// Length of the random alphanumeric suffix
pub const SUFFIX_LEN: usize = 8;

/// `yyyyMMddHHmmss`
const TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Generates ids like `20240101093000aZ3k9QxB`.
///
/// Sortable to the second; within a second uniqueness rests on the 8 random
/// characters alone, so prefer [`SnowflakeIdGenerator`](crate::SnowflakeIdGenerator)
/// where collisions matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleIdGenerator;

impl SimpleIdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// New id stamped with the current local time
    pub fn new_id(&self) -> String {
        self.new_id_at(&Local::now())
    }

    /// New id stamped with `at`, formatted in its own time zone
    pub fn new_id_at<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut id = at.format(TIME_FORMAT).to_string();
        id.extend(
            rand::rng()
                .sample_iter(Alphanumeric)
                .take(SUFFIX_LEN)
                .map(char::from),
        );
        id
    }
}
