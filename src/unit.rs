//! Duration resolutions
//!
//! A table is rendered at one of four resolutions. The choice is made at the
//! type level through [`DurationUnit`], which is sealed: only
//! [`Nanoseconds`], [`Microseconds`], [`Milliseconds`] and [`Seconds`]
//! implement it, so any other unit is rejected at compile time.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Unit symbol outside ns, us, ms, s
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown duration unit {0:?} (expected ns, us, ms or s)")]
pub struct ParseResolutionError(pub String);

/// Time resolution of a rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Resolution {
    /// Nanoseconds (`ns`)
    Nanoseconds,
    /// Microseconds (`us`)
    Microseconds,
    /// Milliseconds (`ms`)
    Milliseconds,
    /// Seconds (`s`)
    Seconds,
}

impl Resolution {
    /// All supported resolutions, finest first
    pub const ALL: [Resolution; 4] = [
        Resolution::Nanoseconds,
        Resolution::Microseconds,
        Resolution::Milliseconds,
        Resolution::Seconds,
    ];

    /// Column header symbol
    pub fn symbol(self) -> &'static str {
        unit_symbol(self)
    }

    /// Nanoseconds per unit
    pub fn nanos_per_unit(self) -> i128 {
        match self {
            Resolution::Nanoseconds => 1,
            Resolution::Microseconds => 1_000,
            Resolution::Milliseconds => 1_000_000,
            Resolution::Seconds => 1_000_000_000,
        }
    }

    /// Convert a signed nanosecond count to whole units, truncating toward zero
    pub fn truncate(self, nanos: i128) -> i128 {
        nanos / self.nanos_per_unit()
    }
}

/// Symbol shown in column headers for a resolution
pub fn unit_symbol(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::Nanoseconds => "ns",
        Resolution::Microseconds => "us",
        Resolution::Milliseconds => "ms",
        Resolution::Seconds => "s",
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Resolution {
    type Err = ParseResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resolution::ALL
            .into_iter()
            .find(|resolution| resolution.symbol() == s)
            .ok_or_else(|| ParseResolutionError(s.to_string()))
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level duration unit for [`EventRecorder`](crate::EventRecorder)
pub trait DurationUnit: sealed::Sealed {
    /// Resolution this unit renders at
    const RESOLUTION: Resolution;
}

macro_rules! duration_unit {
    ($(#[$doc:meta])* $name:ident => $resolution:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl DurationUnit for $name {
            const RESOLUTION: Resolution = Resolution::$resolution;
        }
    };
}

duration_unit!(
    /// Render durations in nanoseconds
    Nanoseconds => Nanoseconds
);
duration_unit!(
    /// Render durations in microseconds
    Microseconds => Microseconds
);
duration_unit!(
    /// Render durations in milliseconds
    Milliseconds => Milliseconds
);
duration_unit!(
    /// Render durations in seconds
    Seconds => Seconds
);
