//! Internal and public status taxonomies
//!
//! [`AuthenticatorStatus`] is the internal, fine-grained outcome of
//! classifying one sensor (or a whole request). It distinguishes
//! user-actionable conditions (enroll something, wait out a lockout, flip a
//! privacy toggle) from policy/capability conditions (administrator disabled
//! the feature, sensor too weak). The public enums are the two coarser
//! surfaces handed to callers; translation between them lives in
//! `halo-resolver`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fine-grained authenticator status. Closed set; resolution always
/// terminates in exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticatorStatus {
    /// Sensor (or request) may proceed
    Ok,
    /// No matching hardware for the request
    NoHardware,
    /// Modality disabled by administrator policy
    DisabledByPolicy,
    /// Sensor was never strong enough for the requested floor
    InsufficientStrength,
    /// Sensor met the floor at provisioning but was downgraded at runtime
    InsufficientStrengthAfterDowngrade,
    /// Hardware-detection query failed or reported the sensor absent
    HardwareNotDetected,
    /// No enrollments for the requesting user
    NotEnrolled,
    /// Biometrics disabled for third-party apps in user settings
    NotEnabledForApps,
    /// Credential fallback requested but no credential is enrolled
    CredentialNotEnrolled,
    /// Sensor is in a time-bounded lockout
    LockoutTimed,
    /// Sensor is locked out until stronger authentication occurs
    LockoutPermanent,
    /// Camera-based sensor blocked by the sensor-privacy toggle
    SensorPrivacyEnabled,
}

impl AuthenticatorStatus {
    /// Whether a sensor with this status may still be started.
    ///
    /// A privacy-blocked sensor stays startable so the prompt can surface a
    /// privacy-specific message instead of pretending no sensor exists.
    pub fn is_eligible(self) -> bool {
        matches!(
            self,
            AuthenticatorStatus::Ok | AuthenticatorStatus::SensorPrivacyEnabled
        )
    }
}

impl fmt::Display for AuthenticatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthenticatorStatus::Ok => "ok",
            AuthenticatorStatus::NoHardware => "no-hardware",
            AuthenticatorStatus::DisabledByPolicy => "disabled-by-policy",
            AuthenticatorStatus::InsufficientStrength => "insufficient-strength",
            AuthenticatorStatus::InsufficientStrengthAfterDowngrade => {
                "insufficient-strength-after-downgrade"
            }
            AuthenticatorStatus::HardwareNotDetected => "hardware-not-detected",
            AuthenticatorStatus::NotEnrolled => "not-enrolled",
            AuthenticatorStatus::NotEnabledForApps => "not-enabled-for-apps",
            AuthenticatorStatus::CredentialNotEnrolled => "credential-not-enrolled",
            AuthenticatorStatus::LockoutTimed => "lockout-timed",
            AuthenticatorStatus::LockoutPermanent => "lockout-permanent",
            AuthenticatorStatus::SensorPrivacyEnabled => "sensor-privacy-enabled",
        };
        f.write_str(name)
    }
}

/// Public error code attached to a detailed pre-authentication result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicError {
    /// Authentication can be started
    None,
    /// The device has no sensor satisfying the request
    NoHardware,
    /// Hardware present but currently unavailable
    HardwareUnavailable,
    /// No biometric enrollments for the user
    NoBiometrics,
    /// No device credential enrolled
    NoDeviceCredential,
    /// A security update re-enabling the sensor is required
    SecurityUpdateRequired,
}

impl fmt::Display for PublicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublicError::None => "none",
            PublicError::NoHardware => "no-hardware",
            PublicError::HardwareUnavailable => "hardware-unavailable",
            PublicError::NoBiometrics => "no-biometrics",
            PublicError::NoDeviceCredential => "no-device-credential",
            PublicError::SecurityUpdateRequired => "security-update-required",
        };
        f.write_str(name)
    }
}

/// Coarse answer for "can this caller authenticate right now" capability
/// checks. Drops all modality detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityCheck {
    /// At least one requested factor can be used
    Success,
    /// No sensor satisfies the request
    NoHardware,
    /// Hardware exists but cannot currently be used
    HardwareUnavailable,
    /// Nothing is enrolled for the requested factors
    NoneEnrolled,
    /// A security update is required before the sensor can be used
    SecurityUpdateRequired,
    /// The requested combination is not supported on this device
    Unsupported,
}

impl fmt::Display for CapabilityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CapabilityCheck::Success => "success",
            CapabilityCheck::NoHardware => "no-hardware",
            CapabilityCheck::HardwareUnavailable => "hardware-unavailable",
            CapabilityCheck::NoneEnrolled => "none-enrolled",
            CapabilityCheck::SecurityUpdateRequired => "security-update-required",
            CapabilityCheck::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_block_is_still_eligible() {
        assert!(AuthenticatorStatus::Ok.is_eligible());
        assert!(AuthenticatorStatus::SensorPrivacyEnabled.is_eligible());
        assert!(!AuthenticatorStatus::NotEnrolled.is_eligible());
        assert!(!AuthenticatorStatus::LockoutTimed.is_eligible());
    }

    #[test]
    fn statuses_serialize_as_snake_case() {
        let json = serde_json::to_string(&AuthenticatorStatus::SensorPrivacyEnabled).unwrap();
        assert_eq!(json, "\"sensor_privacy_enabled\"");
    }
}
