//! Eligibility aggregation and priority resolution
//!
//! A [`Resolution`] is the evaluated form of one prompt request: the sensor
//! snapshot partitioned into eligible and ineligible sets, the credential
//! availability answer, and everything needed to derive the request-level
//! status afterwards without touching the oracles again. It is built in one
//! synchronous pass and is read-only from then on.

use crate::classify::classify_sensor;
use crate::config::ResolverOptions;
use crate::mapper;
use crate::oracle::Environment;
use crate::request::PromptRequest;
use crate::sensor::{SensorDescriptor, SessionState};
use halo_core::{
    AuthenticatorStatus, CapabilityCheck, Modality, ModalitySet, PublicError, UserId,
};
use std::fmt;
use tracing::{debug, warn};

/// Evaluated eligibility state for one prompt request.
#[derive(Debug, Clone)]
pub struct Resolution {
    biometric_requested: bool,
    credential_requested: bool,
    confirmation_required: bool,
    user: UserId,
    /// Sensors that may be started for this request. Includes sensors blocked
    /// only by the camera privacy toggle.
    pub eligible: Vec<SensorDescriptor>,
    /// Sensors that must be skipped, each with the single status explaining
    /// why, in original sensor priority order.
    pub ineligible: Vec<(SensorDescriptor, AuthenticatorStatus)>,
    /// Whether the device credential can satisfy this request right now.
    pub credential_available: bool,
    camera_privacy_enabled: bool,
}

impl Resolution {
    /// Evaluate a request against a sensor snapshot and the oracle
    /// environment. Classifies each sensor once (only when biometrics were
    /// requested) and snapshots the credential and privacy answers, so the
    /// returned value is self-contained.
    pub fn evaluate(
        sensors: &[SensorDescriptor],
        request: &PromptRequest,
        env: &Environment<'_>,
        options: &ResolverOptions,
    ) -> Self {
        let credential_available = env.lock_state.is_device_secure(request.user, request.display);
        let camera_privacy_enabled = env.privacy.camera_privacy_enabled(request.user);

        let classified: Vec<(SensorDescriptor, AuthenticatorStatus)> = if request.wants_biometric()
        {
            sensors
                .iter()
                .map(|sensor| {
                    let status = classify_sensor(sensor, request, env, options);
                    debug!(sensor = %sensor.id, modality = %sensor.modality, %status, "classified sensor");
                    (sensor.clone(), status)
                })
                .collect()
        } else {
            Vec::new()
        };

        let (eligible, ineligible): (Vec<_>, Vec<_>) = classified
            .into_iter()
            .partition(|(_, status)| status.is_eligible());

        Self {
            biometric_requested: request.wants_biometric(),
            credential_requested: request.wants_credential(),
            confirmation_required: request.confirmation_required,
            user: request.user,
            eligible: eligible.into_iter().map(|(sensor, _)| sensor).collect(),
            ineligible,
            credential_available,
            camera_privacy_enabled,
        }
    }

    /// Whether the prompt should require explicit confirmation; passed
    /// through from the request unchanged.
    pub fn confirmation_required(&self) -> bool {
        self.confirmation_required
    }

    /// OR of the eligible sensors' modality bits.
    fn eligible_biometric_modalities(&self) -> ModalitySet {
        self.eligible
            .iter()
            .fold(ModalitySet::NONE, |acc, sensor| acc | sensor.modality)
    }

    /// When several sensors are ineligible for different reasons, pick the
    /// one error to surface: the first `not-enrolled` entry if any ("go
    /// enroll" is the most actionable guidance), otherwise the first entry in
    /// sensor priority order.
    fn error_by_priority(&self) -> Option<&(SensorDescriptor, AuthenticatorStatus)> {
        self.ineligible
            .iter()
            .find(|(_, status)| *status == AuthenticatorStatus::NotEnrolled)
            .or_else(|| self.ineligible.first())
    }

    /// The internal `(modality bitmask, status)` pair for the whole request.
    pub fn internal_status(&self) -> (ModalitySet, AuthenticatorStatus) {
        let (modality, status) = match (self.biometric_requested, self.credential_requested) {
            (true, true) => self.status_for_either(),
            (true, false) => self.status_for_biometric_only(),
            (false, true) => {
                let status = if self.credential_available {
                    AuthenticatorStatus::Ok
                } else {
                    AuthenticatorStatus::CredentialNotEnrolled
                };
                (ModalitySet::only(Modality::Credential), status)
            }
            (false, false) => {
                // Callers must request at least one factor; answer rather
                // than fault if one slips through.
                warn!(user = %self.user, "no authentication factors requested");
                (ModalitySet::NONE, AuthenticatorStatus::NoHardware)
            }
        };
        debug!(%modality, %status, "resolved internal status");
        (modality, status)
    }

    fn status_for_either(&self) -> (ModalitySet, AuthenticatorStatus) {
        if self.credential_available || !self.eligible.is_empty() {
            let mut modality = self.eligible_biometric_modalities();
            if self.credential_available {
                modality |= Modality::Credential;
                return (modality, AuthenticatorStatus::Ok);
            }
            // Credential unavailable and face is the only usable modality:
            // surface the privacy block instead of plain success. The sensor
            // stays startable.
            if modality.is_only(Modality::Face) && self.camera_privacy_enabled {
                return (modality, AuthenticatorStatus::SensorPrivacyEnabled);
            }
            (modality, AuthenticatorStatus::Ok)
        } else if let Some((sensor, status)) = self.error_by_priority() {
            (ModalitySet::only(sensor.modality), *status)
        } else {
            // No sensors configured at all; the credential is the only
            // factor that could ever satisfy this request.
            (
                ModalitySet::only(Modality::Credential),
                AuthenticatorStatus::CredentialNotEnrolled,
            )
        }
    }

    fn status_for_biometric_only(&self) -> (ModalitySet, AuthenticatorStatus) {
        if !self.eligible.is_empty() {
            let modality = self.eligible_biometric_modalities();
            if modality.is_only(Modality::Face) && self.camera_privacy_enabled {
                return (modality, AuthenticatorStatus::SensorPrivacyEnabled);
            }
            (modality, AuthenticatorStatus::Ok)
        } else if let Some((sensor, status)) = self.error_by_priority() {
            (ModalitySet::only(sensor.modality), *status)
        } else {
            (ModalitySet::NONE, AuthenticatorStatus::NoHardware)
        }
    }

    /// Coarse capability-check answer for the request, with modality detail
    /// dropped entirely.
    pub fn capability_check(&self) -> CapabilityCheck {
        let (_, status) = self.internal_status();
        mapper::capability_check(mapper::public_error(status))
    }

    /// Detailed pre-authentication result: the public error code plus the
    /// modality bitmask, with the bitmask cleared for statuses where naming
    /// the modality would be a sensitive disclosure.
    pub fn pre_auth_status(&self) -> (ModalitySet, PublicError) {
        let (modality, status) = self.internal_status();
        let modality = if mapper::retains_modality(status) {
            modality
        } else {
            ModalitySet::NONE
        };
        (modality, mapper::public_error(status))
    }

    /// Whether the caller should show the credential-entry UI.
    pub fn should_show_credential(&self) -> bool {
        self.credential_requested && self.credential_available
    }

    /// Bitmask of factors that are running or could be running for this
    /// request, for UI composition. Includes the credential bit only when
    /// the credential was both requested and available.
    pub fn eligible_modalities(&self) -> ModalitySet {
        let mut modalities = self.eligible_biometric_modalities();
        if self.credential_requested && self.credential_available {
            modalities |= Modality::Credential;
        }
        modalities
    }

    /// Number of eligible sensors still waiting for their hardware start
    /// acknowledgement. The session is fully armed once this reaches zero.
    pub fn sensors_waiting_for_cookie(&self) -> usize {
        self.eligible
            .iter()
            .filter(|sensor| {
                if let SessionState::WaitingForCookie { cookie } = sensor.session_state {
                    debug!(sensor = %sensor.id, cookie, "sensor waiting for cookie");
                    true
                } else {
                    false
                }
            })
            .count()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BiometricRequested: {}, CredentialRequested: {}, Eligible:{{",
            self.biometric_requested, self.credential_requested
        )?;
        for sensor in &self.eligible {
            write!(f, " {}", sensor.id)?;
        }
        write!(f, " }}, Ineligible:{{")?;
        for (sensor, status) in &self.ineligible {
            write!(f, " {}:{}", sensor.id, status)?;
        }
        write!(
            f,
            " }}, CredentialAvailable: {}",
            self.credential_available
        )
    }
}
