//! Creation timestamps.
//!
//! The store stamps every instance once, at creation. Stamps are totally
//! ordered: physical milliseconds first, then a sequence counter that
//! separates instances created within the same millisecond.

use crate::Instant;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Creation timestamp of an instance.
///
/// Consists of:
/// - `wall_time`: milliseconds since the Unix epoch
/// - `sequence`: counter for instances created at the same wall time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateTime {
    /// Physical time component (milliseconds since Unix epoch).
    wall_time: u64,
    /// Tie-breaking counter within one millisecond.
    #[serde(default)]
    sequence: u32,
}

impl CreateTime {
    /// Creates a timestamp at the current time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_instant(Utc::now())
    }

    /// Creates a timestamp from components.
    #[must_use]
    pub const fn new(wall_time: u64, sequence: u32) -> Self {
        Self {
            wall_time,
            sequence,
        }
    }

    /// Creates a timestamp from an instant, truncated to milliseconds.
    /// Instants before the epoch clamp to zero.
    #[must_use]
    pub fn from_instant(instant: Instant) -> Self {
        Self::new(u64::try_from(instant.timestamp_millis()).unwrap_or(0), 0)
    }

    /// Returns the wall time component.
    #[must_use]
    pub const fn wall_time(&self) -> u64 {
        self.wall_time
    }

    /// Returns the sequence counter.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Returns the wall time as an instant.
    #[must_use]
    pub fn as_instant(&self) -> Instant {
        let millis = i64::try_from(self.wall_time).unwrap_or(i64::MAX);
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or(chrono::DateTime::<Utc>::MAX_UTC)
    }
}

impl PartialOrd for CreateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CreateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.wall_time.cmp(&other.wall_time) {
            Ordering::Equal => self.sequence.cmp(&other.sequence),
            other => other,
        }
    }
}
