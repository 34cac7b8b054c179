//! Wire timestamps
//!
//! Both types are two unsigned 32-bit fields on the wire (`sec`, `nsec`),
//! so they only cover 1970-01-01 through early 2106.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WireError};

const NSEC_PER_SEC: u32 = 1_000_000_000;

/// Point in time as seconds + nanoseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Time {
    pub sec: u32,
    pub nsec: u32,
}

/// Span of time as seconds + nanoseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Duration {
    pub sec: u32,
    pub nsec: u32,
}

impl Time {
    pub const fn new(sec: u32, nsec: u32) -> Self {
        Self { sec, nsec }
    }

    /// Build a `Time` from floating-point seconds
    ///
    /// Nanoseconds are rounded, and a rounding carry moves into `sec`.
    pub fn from_sec(t: f64) -> Result<Self> {
        let whole = t.floor();
        if !whole.is_finite() || whole < 0.0 || whole > f64::from(u32::MAX) {
            return Err(WireError::range(t, "Time (dual 32-bit seconds)"));
        }
        let mut sec = whole as u32;
        let mut nsec = ((t - whole) * 1e9).round() as u32;

        let carry = nsec / NSEC_PER_SEC;
        nsec %= NSEC_PER_SEC;
        sec = sec
            .checked_add(carry)
            .ok_or_else(|| WireError::range(t, "Time (dual 32-bit seconds)"))?;

        Ok(Self { sec, nsec })
    }

    pub fn to_sec(&self) -> f64 {
        f64::from(self.sec) + f64::from(self.nsec) * 1e-9
    }

    /// Current wall-clock time
    pub fn now() -> Result<Self> {
        let now = Utc::now();
        let sec = u32::try_from(now.timestamp())
            .map_err(|_| WireError::range(now.timestamp(), "Time (dual 32-bit seconds)"))?;
        Ok(Self {
            sec,
            nsec: now.timestamp_subsec_nanos() % NSEC_PER_SEC,
        })
    }
}

impl Duration {
    pub const fn new(sec: u32, nsec: u32) -> Self {
        Self { sec, nsec }
    }

    pub fn to_sec(&self) -> f64 {
        f64::from(self.sec) + f64::from(self.nsec) * 1e-9
    }
}

impl From<Duration> for std::time::Duration {
    fn from(d: Duration) -> Self {
        std::time::Duration::new(u64::from(d.sec), d.nsec)
    }
}
