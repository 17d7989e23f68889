//! The caller's request snapshot
//!
//! A [`PromptRequest`] is immutable for the duration of a resolution. The
//! modality mask holds biometric bits only; whether a device-credential
//! fallback is acceptable is the separate `credential_allowed` flag, since
//! "credential" is a factor the caller opts into rather than a sensor to
//! classify.

use halo_core::{DisplayId, ModalitySet, SensorId, Strength, UserId};
use serde::{Deserialize, Serialize};

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// Acceptable biometric modalities; empty means no biometric requested
    pub modalities: ModalitySet,
    /// Minimum acceptable strength class for any biometric sensor
    pub strength: Strength,
    /// Whether the device-credential fallback is acceptable
    pub credential_allowed: bool,
    /// Whether the prompt should require explicit confirmation; passed
    /// through to the result unchanged
    pub confirmation_required: bool,
    /// Explicit sensor allow-list; when non-empty, sensors absent from it
    /// are treated as if no hardware existed
    pub allowed_sensor_ids: Vec<SensorId>,
    /// Test/override flag suppressing the enrollment check
    pub ignore_enrollment_state: bool,
    /// The principal the request is evaluated for
    pub user: UserId,
    /// The display the prompt would be shown on
    pub display: DisplayId,
}

impl PromptRequest {
    /// A biometric-only request at the given strength floor.
    pub fn biometric(user: UserId, modalities: ModalitySet, strength: Strength) -> Self {
        Self {
            modalities,
            strength,
            credential_allowed: false,
            confirmation_required: false,
            allowed_sensor_ids: Vec::new(),
            ignore_enrollment_state: false,
            user,
            display: DisplayId::DEFAULT,
        }
    }

    /// A credential-only request (no biometric classification happens).
    pub fn credential_only(user: UserId) -> Self {
        Self {
            modalities: ModalitySet::NONE,
            strength: Strength::Weak,
            credential_allowed: true,
            confirmation_required: false,
            allowed_sensor_ids: Vec::new(),
            ignore_enrollment_state: false,
            user,
            display: DisplayId::DEFAULT,
        }
    }

    /// Allow the credential fallback in addition to any requested biometrics.
    pub fn with_credential_fallback(mut self) -> Self {
        self.credential_allowed = true;
        self
    }

    /// Restrict the request to an explicit sensor allow-list.
    pub fn with_allowed_sensors(mut self, ids: Vec<SensorId>) -> Self {
        self.allowed_sensor_ids = ids;
        self
    }

    /// True when at least one biometric modality was requested.
    pub fn wants_biometric(&self) -> bool {
        self.modalities.has_biometric()
    }

    /// True when the credential fallback is acceptable.
    pub fn wants_credential(&self) -> bool {
        self.credential_allowed
    }
}
