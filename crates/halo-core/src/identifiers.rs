//! Identifiers for sensors, users, and displays
//!
//! All three are small integers assigned by the surrounding platform (sensor
//! ids by the hardware registry, user ids by the account service, display ids
//! by the window system). Newtypes keep them from being mixed up at call
//! sites; the payload is deliberately public-constructible since these values
//! arrive from outside the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one registered authentication sensor, unique within a
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorId(pub u32);

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sensor:{}", self.0)
    }
}

/// The principal a request is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// The display a prompt would be shown on; consumed by the device lock-state
/// query, which is display-scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayId(pub u32);

impl DisplayId {
    /// The default built-in display.
    pub const DEFAULT: DisplayId = DisplayId(0);
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "display:{}", self.0)
    }
}
