//! Registered-sensor descriptors
//!
//! A [`SensorDescriptor`] is the resolver's view of one registered sensor:
//! its static identity (id, modality, factory strength) plus the mutable
//! state the surrounding service tracks for it (current strength, session
//! state). The resolver treats descriptors as an immutable snapshot; the
//! owning service updates them between resolutions.

use halo_core::{HaloError, Modality, SensorId, Strength};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session state of a sensor within the surrounding service's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Not part of any authentication session
    Idle,
    /// Session requested; waiting for the hardware start acknowledgement
    /// tagged with this cookie
    WaitingForCookie {
        /// Caller-supplied cookie echoed back by the acknowledgement
        cookie: u32,
    },
    /// Actively authenticating
    Active,
}

/// One registered authentication sensor.
///
/// Deserialization goes through a validating representation so a snapshot
/// that claims a live strength above the factory ceiling is rejected rather
/// than admitted past the constructor clamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SensorDescriptorRepr")]
pub struct SensorDescriptor {
    /// Sensor identifier, unique within a resolution
    pub id: SensorId,
    /// The modality this sensor captures
    pub modality: Modality,
    /// Strength class provisioned at manufacture time
    pub factory_strength: Strength,
    /// Live strength class; never exceeds `factory_strength`
    current_strength: Strength,
    /// Session state tracked by the owning service
    pub session_state: SessionState,
}

impl SensorDescriptor {
    /// Create a descriptor at its factory strength, idle.
    pub fn new(id: SensorId, modality: Modality, factory_strength: Strength) -> Self {
        Self {
            id,
            modality,
            factory_strength,
            current_strength: factory_strength,
            session_state: SessionState::Idle,
        }
    }

    /// Live strength class. Invariant: `current_strength() <= factory_strength`.
    pub fn current_strength(&self) -> Strength {
        self.current_strength
    }

    /// Apply a runtime downgrade. Strength can only move toward weaker
    /// classes; an "upgrade" request is clamped at the current value, so the
    /// factory ceiling can never be exceeded.
    pub fn downgrade_to(&mut self, strength: Strength) {
        self.current_strength = self.current_strength.max(strength);
    }

    /// Builder-style variant of [`Self::downgrade_to`].
    pub fn downgraded_to(mut self, strength: Strength) -> Self {
        self.downgrade_to(strength);
        self
    }

    /// Builder-style session-state override.
    pub fn with_session_state(mut self, state: SessionState) -> Self {
        self.session_state = state;
        self
    }
}

/// Wire shape of a descriptor, before invariant checks.
#[derive(Deserialize)]
struct SensorDescriptorRepr {
    id: SensorId,
    modality: Modality,
    factory_strength: Strength,
    current_strength: Strength,
    session_state: SessionState,
}

impl TryFrom<SensorDescriptorRepr> for SensorDescriptor {
    type Error = HaloError;

    fn try_from(repr: SensorDescriptorRepr) -> Result<Self, Self::Error> {
        if !repr.factory_strength.at_least(repr.current_strength) {
            return Err(HaloError::invalid(format!(
                "current strength {} exceeds factory strength {} for {}",
                repr.current_strength, repr.factory_strength, repr.id
            )));
        }
        Ok(Self {
            id: repr.id,
            modality: repr.modality,
            factory_strength: repr.factory_strength,
            current_strength: repr.current_strength,
            session_state: repr.session_state,
        })
    }
}

impl fmt::Display for SensorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}/{})",
            self.id, self.modality, self.current_strength, self.factory_strength
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sensor_starts_at_factory_strength() {
        let sensor = SensorDescriptor::new(SensorId(1), Modality::Fingerprint, Strength::Strong);
        assert_eq!(sensor.current_strength(), Strength::Strong);
        assert_eq!(sensor.session_state, SessionState::Idle);
    }

    #[test]
    fn downgrade_only_weakens() {
        let mut sensor = SensorDescriptor::new(SensorId(1), Modality::Face, Strength::Strong);
        sensor.downgrade_to(Strength::Weak);
        assert_eq!(sensor.current_strength(), Strength::Weak);

        // Attempting to move back up is clamped.
        sensor.downgrade_to(Strength::Strong);
        assert_eq!(sensor.current_strength(), Strength::Weak);

        sensor.downgrade_to(Strength::Convenience);
        assert_eq!(sensor.current_strength(), Strength::Convenience);
    }

    #[test]
    fn deserialization_rejects_current_above_factory() {
        let malformed = r#"{
            "id": 1,
            "modality": "Fingerprint",
            "factory_strength": "weak",
            "current_strength": "strong",
            "session_state": "idle"
        }"#;
        let err = serde_json::from_str::<SensorDescriptor>(malformed).unwrap_err();
        assert!(err.to_string().contains("exceeds factory strength"), "{err}");
    }

    #[test]
    fn deserialization_accepts_downgraded_snapshots() {
        let sensor = SensorDescriptor::new(SensorId(3), Modality::Face, Strength::Strong)
            .downgraded_to(Strength::Weak);
        let json = serde_json::to_string(&sensor).unwrap();
        let back: SensorDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sensor);
        assert_eq!(back.current_strength(), Strength::Weak);
    }

    #[test]
    fn current_never_exceeds_factory() {
        let sensor = SensorDescriptor::new(SensorId(2), Modality::Face, Strength::Weak)
            .downgraded_to(Strength::Strong);
        assert!(sensor.factory_strength.at_least(sensor.current_strength()));
        assert_eq!(sensor.current_strength(), Strength::Weak);
    }
}
