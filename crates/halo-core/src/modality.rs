//! Authentication modalities and the combined modality bitmask
//!
//! Each modality occupies one bit so that "any of these factors satisfies the
//! request" is a single OR-combined value. The device credential (PIN,
//! pattern, or password equivalent) is itself a bit in the mask: an either-of
//! result carries both the biometric bits and the credential bit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// One category of authentication factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Device credential fallback (PIN/pattern/password equivalent)
    Credential,
    /// Fingerprint-class sensor
    Fingerprint,
    /// Iris-class sensor
    Iris,
    /// Face-class sensor
    Face,
}

impl Modality {
    /// Bit assigned to this modality in a [`ModalitySet`].
    pub const fn bit(self) -> u32 {
        match self {
            Modality::Credential => 1 << 0,
            Modality::Fingerprint => 1 << 1,
            Modality::Iris => 1 << 2,
            Modality::Face => 1 << 3,
        }
    }

    /// Whether this modality is gated by the camera sensor-privacy toggle.
    ///
    /// Only optically-based capture is covered by the toggle today; this is
    /// deliberately not generalized to other modalities.
    pub const fn is_camera_based(self) -> bool {
        matches!(self, Modality::Face)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Modality::Credential => "credential",
            Modality::Fingerprint => "fingerprint",
            Modality::Iris => "iris",
            Modality::Face => "face",
        };
        f.write_str(name)
    }
}

/// OR-combination of [`Modality`] bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalitySet(u32);

impl ModalitySet {
    /// The empty set ("no factor").
    pub const NONE: ModalitySet = ModalitySet(0);

    /// Set containing a single modality.
    pub const fn only(modality: Modality) -> Self {
        ModalitySet(modality.bit())
    }

    /// Raw bitmask value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when no bits are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether the given modality's bit is set.
    pub const fn contains(self, modality: Modality) -> bool {
        self.0 & modality.bit() != 0
    }

    /// Whether the set contains exactly this one modality and nothing else.
    pub const fn is_only(self, modality: Modality) -> bool {
        self.0 == modality.bit()
    }

    /// Whether any non-credential bit is set.
    pub const fn has_biometric(self) -> bool {
        self.0 & !Modality::Credential.bit() != 0
    }

    /// Add one modality in place.
    pub fn insert(&mut self, modality: Modality) {
        self.0 |= modality.bit();
    }
}

impl From<Modality> for ModalitySet {
    fn from(modality: Modality) -> Self {
        ModalitySet::only(modality)
    }
}

impl BitOr for ModalitySet {
    type Output = ModalitySet;

    fn bitor(self, rhs: ModalitySet) -> ModalitySet {
        ModalitySet(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModalitySet {
    fn bitor_assign(&mut self, rhs: ModalitySet) {
        self.0 |= rhs.0;
    }
}

impl BitOr<Modality> for ModalitySet {
    type Output = ModalitySet;

    fn bitor(self, rhs: Modality) -> ModalitySet {
        ModalitySet(self.0 | rhs.bit())
    }
}

impl BitOrAssign<Modality> for ModalitySet {
    fn bitor_assign(&mut self, rhs: Modality) {
        self.0 |= rhs.bit();
    }
}

impl fmt::Display for ModalitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for modality in [
            Modality::Credential,
            Modality::Fingerprint,
            Modality::Iris,
            Modality::Face,
        ] {
            if self.contains(modality) {
                if !first {
                    f.write_str("|")?;
                }
                write!(f, "{modality}")?;
                first = false;
            }
        }
        Ok(())
    }
}
