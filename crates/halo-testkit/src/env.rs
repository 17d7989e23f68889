//! Programmable fake oracle environment
//!
//! Defaults are the "healthy device" answers: hardware detected, no
//! enrollments, no lockouts, privacy toggles off, biometrics enabled for
//! apps, nothing disabled by policy, device not secure. Tests opt into the
//! conditions they exercise through the `with_*` builders.

use halo_core::{DisplayId, Modality, SensorId, UserId};
use halo_resolver::oracle::{
    DevicePolicyOracle, Environment, LockStateOracle, LockoutMode, OracleError, OracleResult,
    SensorOracle, SensorPrivacyOracle, SettingsOracle,
};
use std::collections::{HashMap, HashSet};

/// In-memory implementation of every resolver oracle.
#[derive(Debug, Clone, Default)]
pub struct FakeEnvironment {
    undetected: HashSet<SensorId>,
    failing: HashSet<SensorId>,
    enrollments: HashSet<(SensorId, UserId)>,
    lockouts: HashMap<(SensorId, UserId), LockoutMode>,
    camera_privacy: HashSet<UserId>,
    apps_disabled: HashSet<UserId>,
    policy_disabled: HashSet<(Modality, UserId)>,
    secure: HashSet<(UserId, DisplayId)>,
}

impl FakeEnvironment {
    /// A healthy-device environment; see module docs for the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow this fake as the resolver's oracle bundle.
    pub fn env(&self) -> Environment<'_> {
        Environment {
            sensors: self,
            device_policy: self,
            settings: self,
            privacy: self,
            lock_state: self,
        }
    }

    /// Mark a sensor's hardware as not detected.
    pub fn with_undetected_sensor(mut self, sensor: SensorId) -> Self {
        self.undetected.insert(sensor);
        self
    }

    /// Make every driver query for this sensor fail.
    pub fn with_failing_sensor(mut self, sensor: SensorId) -> Self {
        self.failing.insert(sensor);
        self
    }

    /// Enroll the user on a sensor.
    pub fn with_enrollment(mut self, sensor: SensorId, user: UserId) -> Self {
        self.enrollments.insert((sensor, user));
        self
    }

    /// Put a sensor into the given lockout state for a user.
    pub fn with_lockout(mut self, sensor: SensorId, user: UserId, mode: LockoutMode) -> Self {
        self.lockouts.insert((sensor, user), mode);
        self
    }

    /// Turn the camera privacy toggle on for a user.
    pub fn with_camera_privacy(mut self, user: UserId) -> Self {
        self.camera_privacy.insert(user);
        self
    }

    /// Disable biometrics for third-party apps for a user.
    pub fn with_apps_disabled(mut self, user: UserId) -> Self {
        self.apps_disabled.insert(user);
        self
    }

    /// Disable a modality by administrator policy for a user.
    pub fn with_policy_disabled(mut self, modality: Modality, user: UserId) -> Self {
        self.policy_disabled.insert((modality, user));
        self
    }

    /// Mark the device secure (credential enrolled) for a user/display pair.
    pub fn with_secure_device(mut self, user: UserId, display: DisplayId) -> Self {
        self.secure.insert((user, display));
        self
    }

    fn check_driver(&self, sensor: SensorId) -> OracleResult<()> {
        if self.failing.contains(&sensor) {
            Err(OracleError::new(format!("driver for {sensor} is down")))
        } else {
            Ok(())
        }
    }
}

impl SensorOracle for FakeEnvironment {
    fn is_hardware_detected(&self, sensor: SensorId) -> OracleResult<bool> {
        self.check_driver(sensor)?;
        Ok(!self.undetected.contains(&sensor))
    }

    fn has_enrollments(&self, sensor: SensorId, user: UserId) -> OracleResult<bool> {
        self.check_driver(sensor)?;
        Ok(self.enrollments.contains(&(sensor, user)))
    }

    fn lockout_mode(&self, sensor: SensorId, user: UserId) -> OracleResult<LockoutMode> {
        self.check_driver(sensor)?;
        Ok(self
            .lockouts
            .get(&(sensor, user))
            .copied()
            .unwrap_or(LockoutMode::None))
    }
}

impl DevicePolicyOracle for FakeEnvironment {
    fn is_modality_disabled(&self, modality: Modality, user: UserId) -> OracleResult<bool> {
        Ok(self.policy_disabled.contains(&(modality, user)))
    }
}

impl SettingsOracle for FakeEnvironment {
    fn biometrics_enabled_for_apps(&self, user: UserId) -> OracleResult<bool> {
        Ok(!self.apps_disabled.contains(&user))
    }
}

impl SensorPrivacyOracle for FakeEnvironment {
    fn camera_privacy_enabled(&self, user: UserId) -> bool {
        self.camera_privacy.contains(&user)
    }
}

impl LockStateOracle for FakeEnvironment {
    fn is_device_secure(&self, user: UserId, display: DisplayId) -> bool {
        self.secure.contains(&(user, display))
    }
}
