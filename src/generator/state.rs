//! Mutable generator state guarded by the generator lock

/// Last issued timestamp and the sequence used with it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// Absolute milliseconds of the last issued id, `None` before the first
    pub last_timestamp: Option<i64>,
    pub sequence: i64,
}

/// What the clock reading means relative to the last issued id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// First id, or the clock moved on to a later millisecond
    Advanced,
    /// Still inside the millisecond of the last id
    Same,
    /// Clock is behind the last id by this many milliseconds
    Regressed(i64),
}

impl State {
    #[inline(always)]
    pub fn classify(&self, now: i64) -> Tick {
        match self.last_timestamp {
            Some(last) if now < last => Tick::Regressed(last - now),
            Some(last) if now == last => Tick::Same,
            _ => Tick::Advanced,
        }
    }
}
