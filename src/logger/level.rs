//! Severity levels and the fixed level-name table.
//!
//! # Ordering
//! ```text
//! Debug(10) < Verbose(20) < Info(30) < Warn(40) < Error(50) < Off(1000)
//! ```
//!
//! `Off` only makes sense as a threshold: no call severity reaches its rank,
//! so a logger set to `Off` emits nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::sink::Tier;

/// Message severity, ordered by numeric rank.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug = 10,
    Verbose = 20,
    Info = 30,
    Warn = 40,
    Error = 50,
    Off = 1000,
}

/// The fixed (level, display name) table. Ordered by rank.
pub const LEVEL_NAMES: [(Level, &str); 6] = [
    (Level::Debug, "Debug"),
    (Level::Verbose, "Verbose"),
    (Level::Info, "Info"),
    (Level::Warn, "Warn"),
    (Level::Error, "Error"),
    (Level::Off, "Off"),
];

impl Level {
    /// Numeric rank used for threshold comparison.
    pub const fn rank(self) -> u16 {
        self as u16
    }

    /// Display name from the level table.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Verbose => "Verbose",
            Level::Info => "Info",
            Level::Warn => "Warn",
            Level::Error => "Error",
            Level::Off => "Off",
        }
    }

    /// Look up a level by its exact display name.
    pub fn from_name(name: &str) -> Option<Level> {
        LEVEL_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(level, _)| *level)
    }

    /// Look up a level by its numeric rank.
    pub fn from_rank(rank: u16) -> Option<Level> {
        LEVEL_NAMES
            .iter()
            .find(|(level, _)| level.rank() == rank)
            .map(|(level, _)| *level)
    }

    /// Output tier a line at this severity is written to.
    pub const fn tier(self) -> Tier {
        match self {
            Level::Debug | Level::Verbose | Level::Info => Tier::Info,
            Level::Warn => Tier::Warning,
            Level::Error | Level::Off => Tier::Error,
        }
    }

    /// True for severities that may escalate (Error and above).
    pub const fn is_error(self) -> bool {
        self.rank() >= Level::Error.rank()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not one of the level display names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level name: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(s).ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
