//! Effectivity windows.
//!
//! A window bounds the period during which an instance is considered
//! valid. Either bound may be open. The start bound is inclusive and the
//! end bound exclusive, so adjacent windows never overlap.

use crate::{Error, Instant, Result};
use serde::{Deserialize, Serialize};

/// An optional `[start, end)` range of instants.
///
/// `None` on either side means the window is open in that direction.
/// The invariant `start <= end` is enforced on construction and on
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct EffectivityWindow {
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<Instant>,
}

impl EffectivityWindow {
    /// Creates a window, rejecting `start > end`.
    pub fn new(start: Option<Instant>, end: Option<Instant>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(Error::InvalidWindow { start: s, end: e });
            }
        }
        Ok(Self { start, end })
    }

    /// A window open on both sides; contains every instant.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A window that opens at `start` and never closes.
    #[must_use]
    pub const fn starting(start: Instant) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// A window that was always open and closes at `end`.
    #[must_use]
    pub const fn ending(end: Instant) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Returns the inclusive start bound, if any.
    #[must_use]
    pub const fn start(&self) -> Option<Instant> {
        self.start
    }

    /// Returns the exclusive end bound, if any.
    #[must_use]
    pub const fn end(&self) -> Option<Instant> {
        self.end
    }

    /// Returns true if `instant` falls inside the window.
    #[must_use]
    pub fn contains(&self, instant: Instant) -> bool {
        let after_start = self.start.is_none_or(|s| instant >= s);
        let before_end = self.end.is_none_or(|e| instant < e);
        after_start && before_end
    }

    /// Returns true if the window excludes `instant`.
    #[must_use]
    pub fn excludes(&self, instant: Instant) -> bool {
        !self.contains(instant)
    }
}

#[derive(Deserialize)]
struct RawWindow {
    #[serde(default)]
    start: Option<Instant>,
    #[serde(default)]
    end: Option<Instant>,
}

impl TryFrom<RawWindow> for EffectivityWindow {
    type Error = Error;

    fn try_from(raw: RawWindow) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}
