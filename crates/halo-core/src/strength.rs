//! Sensor strength classes
//!
//! An ordered classification of how resistant a sensor is to spoofing and
//! bypass. A sensor is provisioned with a factory strength and may be
//! downgraded at runtime (for example by a security-relevant software
//! update), but never upgraded past its factory class.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength class of a sensor or the floor demanded by a request.
///
/// Variants are declared strongest first; the derived [`Ord`] therefore ranks
/// `Strong < Weak < Convenience`, and "at least as strong as" is `<=`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Suitable for cryptographic key release
    Strong,
    /// Suitable for app unlock but not key release
    Weak,
    /// Convenience-only, not suitable for app authentication
    Convenience,
}

impl Strength {
    /// Whether this strength meets the given floor.
    pub fn at_least(self, floor: Strength) -> bool {
        self <= floor
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strength::Strong => "strong",
            Strength::Weak => "weak",
            Strength::Convenience => "convenience",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_ranks_strong_first() {
        assert!(Strength::Strong.at_least(Strength::Strong));
        assert!(Strength::Strong.at_least(Strength::Weak));
        assert!(Strength::Strong.at_least(Strength::Convenience));
        assert!(!Strength::Weak.at_least(Strength::Strong));
        assert!(Strength::Weak.at_least(Strength::Weak));
        assert!(!Strength::Convenience.at_least(Strength::Weak));
    }
}
