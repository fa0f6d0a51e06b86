//! Half-open time interval value type.
//!
//! Both slot bounds and availability intervals follow half-open `[from, to)`
//! semantics: two intervals that merely touch at an endpoint do not overlap.

use chrono::{DateTime, Utc};

/// A half-open time range `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Interval {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Whether the interval is non-empty, i.e. `to` is strictly after `from`.
    pub fn is_well_formed(&self) -> bool {
        self.to > self.from
    }

    /// Whether two intervals share at least one instant of time.
    ///
    /// Touching endpoints (`self.to == other.from`) do not count as overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.from < other.to && self.to > other.from
    }

    /// Whether `other` lies entirely within this interval, bounds inclusive.
    pub fn contains(&self, other: &Interval) -> bool {
        other.from >= self.from && other.to <= self.to
    }
}
