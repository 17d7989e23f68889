//! Property-based checks over randomized sensor fleets
//!
//! Two properties the resolver must hold for any input: resolution is
//! deterministic for a fixed snapshot, and a sensor whose live strength
//! misses the requested floor is never eligible.

use halo_core::{Modality, ModalitySet, SensorId, Strength, UserId};
use halo_resolver::{
    LockoutMode, PromptRequest, Resolution, ResolverOptions, SensorDescriptor,
};
use halo_testkit::FakeEnvironment;
use proptest::prelude::*;

const USER: UserId = UserId(10);

fn modality_strategy() -> impl Strategy<Value = Modality> {
    prop_oneof![
        Just(Modality::Fingerprint),
        Just(Modality::Iris),
        Just(Modality::Face),
    ]
}

fn strength_strategy() -> impl Strategy<Value = Strength> {
    prop_oneof![
        Just(Strength::Strong),
        Just(Strength::Weak),
        Just(Strength::Convenience),
    ]
}

fn lockout_strategy() -> impl Strategy<Value = LockoutMode> {
    prop_oneof![
        Just(LockoutMode::None),
        Just(LockoutMode::Timed),
        Just(LockoutMode::Permanent),
    ]
}

/// One sensor plus the fake-oracle answers that concern it.
#[derive(Debug, Clone)]
struct SensorSeed {
    modality: Modality,
    factory: Strength,
    downgrade: Strength,
    detected: bool,
    enrolled: bool,
    lockout: LockoutMode,
}

fn sensor_seed() -> impl Strategy<Value = SensorSeed> {
    (
        modality_strategy(),
        strength_strategy(),
        strength_strategy(),
        any::<bool>(),
        any::<bool>(),
        lockout_strategy(),
    )
        .prop_map(
            |(modality, factory, downgrade, detected, enrolled, lockout)| SensorSeed {
                modality,
                factory,
                downgrade,
                detected,
                enrolled,
                lockout,
            },
        )
}

#[derive(Debug, Clone)]
struct Scenario {
    seeds: Vec<SensorSeed>,
    floor: Strength,
    credential_allowed: bool,
    secure: bool,
    camera_privacy: bool,
}

fn scenario() -> impl Strategy<Value = Scenario> {
    (
        prop::collection::vec(sensor_seed(), 0..4),
        strength_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(seeds, floor, credential_allowed, secure, camera_privacy)| Scenario {
                seeds,
                floor,
                credential_allowed,
                secure,
                camera_privacy,
            },
        )
}

fn build(scenario: &Scenario) -> (Vec<SensorDescriptor>, PromptRequest, FakeEnvironment) {
    let mut fake = FakeEnvironment::new();
    let mut sensors = Vec::new();
    let mut modalities = ModalitySet::NONE;

    for (index, seed) in scenario.seeds.iter().enumerate() {
        let id = SensorId(index as u32);
        let sensor =
            SensorDescriptor::new(id, seed.modality, seed.factory).downgraded_to(seed.downgrade);
        modalities.insert(seed.modality);

        if !seed.detected {
            fake = fake.with_undetected_sensor(id);
        }
        if seed.enrolled {
            fake = fake.with_enrollment(id, USER);
        }
        fake = fake.with_lockout(id, USER, seed.lockout);
        sensors.push(sensor);
    }

    if scenario.camera_privacy {
        fake = fake.with_camera_privacy(USER);
    }

    let mut request = PromptRequest::biometric(USER, modalities, scenario.floor);
    if scenario.credential_allowed {
        request = request.with_credential_fallback();
    }
    if scenario.secure {
        fake = fake.with_secure_device(USER, request.display);
    }

    (sensors, request, fake)
}

proptest! {
    #[test]
    fn resolution_is_deterministic(scenario in scenario()) {
        let (sensors, request, fake) = build(&scenario);
        let options = ResolverOptions::default();

        let first = Resolution::evaluate(&sensors, &request, &fake.env(), &options);
        let second = Resolution::evaluate(&sensors, &request, &fake.env(), &options);

        prop_assert_eq!(first.internal_status(), second.internal_status());
        prop_assert_eq!(first.pre_auth_status(), second.pre_auth_status());
        prop_assert_eq!(first.capability_check(), second.capability_check());
        prop_assert_eq!(first.eligible_modalities(), second.eligible_modalities());

        let first_ids: Vec<SensorId> = first.eligible.iter().map(|s| s.id).collect();
        let second_ids: Vec<SensorId> = second.eligible.iter().map(|s| s.id).collect();
        prop_assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn under_strength_sensors_are_never_eligible(scenario in scenario()) {
        let (sensors, request, fake) = build(&scenario);
        let options = ResolverOptions::default();

        let resolution = Resolution::evaluate(&sensors, &request, &fake.env(), &options);

        for sensor in &sensors {
            if !sensor.current_strength().at_least(request.strength) {
                prop_assert!(
                    resolution.eligible.iter().all(|s| s.id != sensor.id),
                    "sensor {} ({} < {}) must not be eligible",
                    sensor.id,
                    sensor.current_strength(),
                    request.strength,
                );
            }
        }
    }

    #[test]
    fn every_sensor_is_accounted_for_exactly_once(scenario in scenario()) {
        let (sensors, request, fake) = build(&scenario);
        let options = ResolverOptions::default();

        let resolution = Resolution::evaluate(&sensors, &request, &fake.env(), &options);

        if request.wants_biometric() {
            let total = resolution.eligible.len() + resolution.ineligible.len();
            prop_assert_eq!(total, sensors.len());
        } else {
            prop_assert!(resolution.eligible.is_empty());
            prop_assert!(resolution.ineligible.is_empty());
        }
    }
}
