//! Per-sensor classification
//!
//! Maps one sensor plus the request and the oracle environment to a single
//! [`AuthenticatorStatus`]. Checks short-circuit in a fixed order, and that
//! order is a contract: it decides which error is reported when several
//! conditions hold at once (an excluded sensor is "no hardware" even if it is
//! also too weak; a weak sensor reports its strength before its missing
//! enrollments; an undetected sensor never reports enrollment state; and so
//! on). Reordering changes observable error precedence.

use crate::config::ResolverOptions;
use crate::oracle::{Environment, LockoutMode, OracleResult};
use crate::request::PromptRequest;
use crate::sensor::SensorDescriptor;
use halo_core::AuthenticatorStatus;
use tracing::{debug, warn};

/// Classify one sensor for the given request.
///
/// Total: any oracle failure is folded into
/// [`AuthenticatorStatus::HardwareNotDetected`] rather than propagated.
pub fn classify_sensor(
    sensor: &SensorDescriptor,
    request: &PromptRequest,
    env: &Environment<'_>,
    options: &ResolverOptions,
) -> AuthenticatorStatus {
    // 1. Explicit allow-list: an excluded sensor does not exist for this
    // request, whatever its other properties.
    if !request.allowed_sensor_ids.is_empty() && !request.allowed_sensor_ids.contains(&sensor.id) {
        return AuthenticatorStatus::NoHardware;
    }

    // 2. Strength floor. The factory/current distinction matters: a sensor
    // that met the floor at provisioning but was downgraded at runtime needs
    // different remediation text than one that was never strong enough.
    let was_strong_enough = sensor.factory_strength.at_least(request.strength);
    let is_strong_enough = sensor.current_strength().at_least(request.strength);

    if was_strong_enough && !is_strong_enough {
        return AuthenticatorStatus::InsufficientStrengthAfterDowngrade;
    }
    if !was_strong_enough {
        return AuthenticatorStatus::InsufficientStrength;
    }

    match classify_live_state(sensor, request, env, options) {
        Ok(status) => status,
        Err(err) => {
            warn!(sensor = %sensor.id, error = %err, "oracle query failed during classification");
            AuthenticatorStatus::HardwareNotDetected
        }
    }
}

/// Steps 3–8: the oracle-backed portion of the ladder.
fn classify_live_state(
    sensor: &SensorDescriptor,
    request: &PromptRequest,
    env: &Environment<'_>,
    options: &ResolverOptions,
) -> OracleResult<AuthenticatorStatus> {
    // 3. Hardware detection.
    if !env.sensors.is_hardware_detected(sensor.id)? {
        return Ok(AuthenticatorStatus::HardwareNotDetected);
    }

    // 4. Enrollment, unless the caller opted out of the check.
    if !env.sensors.has_enrollments(sensor.id, request.user)? && !request.ignore_enrollment_state {
        return Ok(AuthenticatorStatus::NotEnrolled);
    }

    // 5. Camera privacy toggle. Soft failure: the aggregator still treats
    // this sensor as eligible so the prompt can show a privacy-specific
    // message instead of behaving as if no sensor existed.
    if sensor.modality.is_camera_based() && env.privacy.camera_privacy_enabled(request.user) {
        return Ok(AuthenticatorStatus::SensorPrivacyEnabled);
    }

    // 6. Lockout.
    match env.sensors.lockout_mode(sensor.id, request.user)? {
        LockoutMode::Timed => return Ok(AuthenticatorStatus::LockoutTimed),
        LockoutMode::Permanent => return Ok(AuthenticatorStatus::LockoutPermanent),
        LockoutMode::None => {}
    }

    // 7. Per-user app setting.
    if !env.settings.biometrics_enabled_for_apps(request.user)? {
        return Ok(AuthenticatorStatus::NotEnabledForApps);
    }

    // 8. Administrative policy.
    if options.check_device_policy
        && env
            .device_policy
            .is_modality_disabled(sensor.modality, request.user)?
    {
        debug!(sensor = %sensor.id, modality = %sensor.modality, "modality disabled by device policy");
        return Ok(AuthenticatorStatus::DisabledByPolicy);
    }

    Ok(AuthenticatorStatus::Ok)
}
