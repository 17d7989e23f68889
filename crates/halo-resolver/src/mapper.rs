//! Public status mapping
//!
//! Two presentations of the internal `(modality bitmask, status)` pair. The
//! coarse capability code drops modality detail entirely; the detailed
//! pre-authentication result keeps it, except for statuses where naming the
//! modality would disclose which sensor a policy- or strength-driven refusal
//! evaluated. Matches are exhaustive on purpose: adding a status without
//! deciding its public mapping must not compile.

use halo_core::{AuthenticatorStatus, CapabilityCheck, PublicError};

/// Map an internal status to the public error code attached to a detailed
/// result.
pub fn public_error(status: AuthenticatorStatus) -> PublicError {
    match status {
        AuthenticatorStatus::Ok => PublicError::None,
        AuthenticatorStatus::NoHardware | AuthenticatorStatus::InsufficientStrength => {
            PublicError::NoHardware
        }
        AuthenticatorStatus::InsufficientStrengthAfterDowngrade => {
            PublicError::SecurityUpdateRequired
        }
        AuthenticatorStatus::NotEnrolled => PublicError::NoBiometrics,
        AuthenticatorStatus::CredentialNotEnrolled => PublicError::NoDeviceCredential,
        AuthenticatorStatus::DisabledByPolicy
        | AuthenticatorStatus::HardwareNotDetected
        | AuthenticatorStatus::NotEnabledForApps
        | AuthenticatorStatus::LockoutTimed
        | AuthenticatorStatus::LockoutPermanent
        | AuthenticatorStatus::SensorPrivacyEnabled => PublicError::HardwareUnavailable,
    }
}

/// Collapse a public error code into the coarse capability-check answer.
pub fn capability_check(error: PublicError) -> CapabilityCheck {
    match error {
        PublicError::None => CapabilityCheck::Success,
        PublicError::NoHardware => CapabilityCheck::NoHardware,
        PublicError::NoBiometrics | PublicError::NoDeviceCredential => {
            CapabilityCheck::NoneEnrolled
        }
        PublicError::SecurityUpdateRequired => CapabilityCheck::SecurityUpdateRequired,
        PublicError::HardwareUnavailable => CapabilityCheck::HardwareUnavailable,
    }
}

/// Whether a detailed result for this status may carry modality detail.
///
/// Policy- and strength-driven refusals (and the app-setting refusal) clear
/// it: exposing which modality tripped them is a sensitive disclosure.
/// Hardware, enrollment, lockout, and privacy statuses keep it, since the
/// caller needs the modality to render targeted remediation UI.
pub fn retains_modality(status: AuthenticatorStatus) -> bool {
    match status {
        AuthenticatorStatus::Ok
        | AuthenticatorStatus::NoHardware
        | AuthenticatorStatus::InsufficientStrengthAfterDowngrade
        | AuthenticatorStatus::HardwareNotDetected
        | AuthenticatorStatus::NotEnrolled
        | AuthenticatorStatus::CredentialNotEnrolled
        | AuthenticatorStatus::LockoutTimed
        | AuthenticatorStatus::LockoutPermanent
        | AuthenticatorStatus::SensorPrivacyEnabled => true,

        AuthenticatorStatus::DisabledByPolicy
        | AuthenticatorStatus::InsufficientStrength
        | AuthenticatorStatus::NotEnabledForApps => false,
    }
}
