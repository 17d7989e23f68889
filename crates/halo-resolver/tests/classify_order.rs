//! Classifier check-order contract
//!
//! The per-sensor check ladder short-circuits in a fixed order, and that
//! order decides which error is reported when several conditions hold at
//! once. These tests pin each adjacent pair of checks so a reordering shows
//! up as a failure, plus the folding of oracle failures into
//! `hardware-not-detected`.

use halo_core::{AuthenticatorStatus, Modality, ModalitySet, SensorId, Strength, UserId};
use halo_resolver::{
    classify_sensor, LockoutMode, PromptRequest, ResolverOptions, SensorDescriptor,
};
use halo_testkit::FakeEnvironment;

const USER: UserId = UserId(10);

fn fingerprint(id: u32) -> SensorDescriptor {
    SensorDescriptor::new(SensorId(id), Modality::Fingerprint, Strength::Strong)
}

fn face(id: u32) -> SensorDescriptor {
    SensorDescriptor::new(SensorId(id), Modality::Face, Strength::Strong)
}

fn request_for(modalities: ModalitySet) -> PromptRequest {
    PromptRequest::biometric(USER, modalities, Strength::Strong)
}

fn classify(
    sensor: &SensorDescriptor,
    request: &PromptRequest,
    fake: &FakeEnvironment,
) -> AuthenticatorStatus {
    classify_sensor(sensor, request, &fake.env(), &ResolverOptions::default())
}

#[test]
fn healthy_sensor_is_ok() {
    let sensor = fingerprint(1);
    let fake = FakeEnvironment::new().with_enrollment(sensor.id, USER);
    let request = request_for(ModalitySet::only(Modality::Fingerprint));
    assert_eq!(classify(&sensor, &request, &fake), AuthenticatorStatus::Ok);
}

#[test]
fn allow_list_exclusion_wins_over_everything() {
    // Excluded sensor that is also too weak and not enrolled: the
    // allow-list check must answer first.
    let sensor = SensorDescriptor::new(SensorId(1), Modality::Fingerprint, Strength::Weak);
    let fake = FakeEnvironment::new();
    let request = request_for(ModalitySet::only(Modality::Fingerprint))
        .with_allowed_sensors(vec![SensorId(9)]);
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::NoHardware
    );
}

#[test]
fn weak_sensor_reports_strength_before_enrollment() {
    let sensor = SensorDescriptor::new(SensorId(1), Modality::Fingerprint, Strength::Weak);
    let fake = FakeEnvironment::new(); // no enrollments either
    let request = request_for(ModalitySet::only(Modality::Fingerprint));
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::InsufficientStrength
    );
}

#[test]
fn downgraded_sensor_is_distinguished_from_never_strong() {
    let sensor = fingerprint(1).downgraded_to(Strength::Weak);
    let fake = FakeEnvironment::new().with_enrollment(sensor.id, USER);
    let request = request_for(ModalitySet::only(Modality::Fingerprint));
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::InsufficientStrengthAfterDowngrade
    );
}

#[test]
fn undetected_hardware_masks_enrollment_state() {
    let sensor = fingerprint(1);
    let fake = FakeEnvironment::new().with_undetected_sensor(sensor.id);
    let request = request_for(ModalitySet::only(Modality::Fingerprint));
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::HardwareNotDetected
    );
}

#[test]
fn oracle_failure_folds_to_hardware_not_detected() {
    let sensor = fingerprint(1);
    let fake = FakeEnvironment::new()
        .with_enrollment(sensor.id, USER)
        .with_failing_sensor(sensor.id);
    let request = request_for(ModalitySet::only(Modality::Fingerprint));
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::HardwareNotDetected
    );
}

#[test]
fn missing_enrollment_reported_before_privacy() {
    let sensor = face(1);
    let fake = FakeEnvironment::new().with_camera_privacy(USER);
    let request = request_for(ModalitySet::only(Modality::Face));
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::NotEnrolled
    );
}

#[test]
fn ignore_enrollment_state_suppresses_the_check() {
    let sensor = fingerprint(1);
    let fake = FakeEnvironment::new(); // nothing enrolled
    let mut request = request_for(ModalitySet::only(Modality::Fingerprint));
    request.ignore_enrollment_state = true;
    assert_eq!(classify(&sensor, &request, &fake), AuthenticatorStatus::Ok);
}

#[test]
fn privacy_applies_to_camera_modalities_only() {
    let face_sensor = face(1);
    let finger_sensor = fingerprint(2);
    let fake = FakeEnvironment::new()
        .with_enrollment(face_sensor.id, USER)
        .with_enrollment(finger_sensor.id, USER)
        .with_camera_privacy(USER);

    let face_request = request_for(ModalitySet::only(Modality::Face));
    assert_eq!(
        classify(&face_sensor, &face_request, &fake),
        AuthenticatorStatus::SensorPrivacyEnabled
    );

    let finger_request = request_for(ModalitySet::only(Modality::Fingerprint));
    assert_eq!(
        classify(&finger_sensor, &finger_request, &fake),
        AuthenticatorStatus::Ok
    );
}

#[test]
fn privacy_reported_before_lockout() {
    let sensor = face(1);
    let fake = FakeEnvironment::new()
        .with_enrollment(sensor.id, USER)
        .with_camera_privacy(USER)
        .with_lockout(sensor.id, USER, LockoutMode::Permanent);
    let request = request_for(ModalitySet::only(Modality::Face));
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::SensorPrivacyEnabled
    );
}

#[test]
fn lockout_reported_before_app_setting() {
    let sensor = fingerprint(1);
    let fake = FakeEnvironment::new()
        .with_enrollment(sensor.id, USER)
        .with_lockout(sensor.id, USER, LockoutMode::Timed)
        .with_apps_disabled(USER);
    let request = request_for(ModalitySet::only(Modality::Fingerprint));
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::LockoutTimed
    );
}

#[test]
fn permanent_lockout_is_reported_as_such() {
    let sensor = fingerprint(1);
    let fake = FakeEnvironment::new()
        .with_enrollment(sensor.id, USER)
        .with_lockout(sensor.id, USER, LockoutMode::Permanent);
    let request = request_for(ModalitySet::only(Modality::Fingerprint));
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::LockoutPermanent
    );
}

#[test]
fn app_setting_reported_before_device_policy() {
    let sensor = fingerprint(1);
    let fake = FakeEnvironment::new()
        .with_enrollment(sensor.id, USER)
        .with_apps_disabled(USER)
        .with_policy_disabled(Modality::Fingerprint, USER);
    let request = request_for(ModalitySet::only(Modality::Fingerprint));
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::NotEnabledForApps
    );
}

#[test]
fn device_policy_disables_the_modality() {
    let sensor = fingerprint(1);
    let fake = FakeEnvironment::new()
        .with_enrollment(sensor.id, USER)
        .with_policy_disabled(Modality::Fingerprint, USER);
    let request = request_for(ModalitySet::only(Modality::Fingerprint));
    assert_eq!(
        classify(&sensor, &request, &fake),
        AuthenticatorStatus::DisabledByPolicy
    );
}

#[test]
fn policy_check_can_be_disabled_by_options() {
    let sensor = fingerprint(1);
    let fake = FakeEnvironment::new()
        .with_enrollment(sensor.id, USER)
        .with_policy_disabled(Modality::Fingerprint, USER);
    let request = request_for(ModalitySet::only(Modality::Fingerprint));
    let options = ResolverOptions {
        check_device_policy: false,
    };
    assert_eq!(
        classify_sensor(&sensor, &request, &fake.env(), &options),
        AuthenticatorStatus::Ok
    );
}
