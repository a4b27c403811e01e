//! Shared test utilities for Snowflake tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use crate::generator::time::{unix_time_ms, TimeSource};

/// Clock frozen at a value the test moves by hand
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, by: i64) {
        self.millis.fetch_add(by, Ordering::SeqCst);
    }
}

impl TimeSource for FixedClock {
    fn current_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// Clock replaying a fixed list of readings, then repeating the last one
#[derive(Debug)]
pub struct ScriptedClock {
    values: Vec<i64>,
    index: AtomicUsize,
}

impl ScriptedClock {
    pub fn new(values: Vec<i64>) -> Self {
        assert!(!values.is_empty(), "script needs at least one reading");
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }

    /// Number of times the clock has been read
    pub fn reads(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

impl TimeSource for ScriptedClock {
    fn current_millis(&self) -> i64 {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.values[i.min(self.values.len() - 1)]
    }
}

/// Current wall clock in ms since the Unix epoch
pub fn wall_clock_ms() -> i64 {
    unix_time_ms()
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[i64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in generation order
pub fn assert_ids_monotonic(ids: &[i64]) {
    for pair in ids.windows(2) {
        assert!(
            pair[1] > pair[0],
            "ID {} is not greater than previous ID {}",
            pair[1],
            pair[0]
        );
    }
}

/// Assert every batch is increasing in its own order and no id repeats across batches
pub fn assert_each_monotonic_and_all_unique(batches: &[Vec<i64>], expected_count: usize) {
    for batch in batches {
        assert_ids_monotonic(batch);
    }
    let all: Vec<i64> = batches.iter().flatten().copied().collect();
    assert_unique_ids(&all, expected_count);
}
