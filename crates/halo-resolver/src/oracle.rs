//! External query interfaces
//!
//! The resolver consults several platform collaborators while classifying
//! sensors. Each is modeled as a small synchronous trait; implementations
//! that front asynchronous services are expected to resolve their answers
//! before the resolver is invoked, keeping the resolution itself pure.
//!
//! Queries that can fail return [`OracleResult`]; the classifier folds any
//! failure into `hardware-not-detected` rather than propagating it, so a
//! resolution always terminates with a well-formed status.

use halo_core::{DisplayId, Modality, SensorId, UserId};
use serde::{Deserialize, Serialize};

/// Failure of an external query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("oracle query failed: {message}")]
pub struct OracleError {
    /// Description of the failure, for logs only
    pub message: String,
}

impl OracleError {
    /// Create an oracle error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for fallible oracle queries.
pub type OracleResult<T> = Result<T, OracleError>;

/// Lockout state reported by a sensor driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockoutMode {
    /// Not locked out
    #[default]
    None,
    /// Time-bounded lockout after repeated failures
    Timed,
    /// Locked out until stronger authentication occurs
    Permanent,
}

/// Queries answered by the sensor drivers themselves.
pub trait SensorOracle {
    /// Whether the sensor's hardware is currently detected.
    fn is_hardware_detected(&self, sensor: SensorId) -> OracleResult<bool>;

    /// Whether the user has at least one enrollment on this sensor.
    fn has_enrollments(&self, sensor: SensorId, user: UserId) -> OracleResult<bool>;

    /// The sensor's lockout state for this user.
    fn lockout_mode(&self, sensor: SensorId, user: UserId) -> OracleResult<LockoutMode>;
}

/// Device-wide administrative policy.
pub trait DevicePolicyOracle {
    /// Whether an administrator has disabled this modality for the user.
    fn is_modality_disabled(&self, modality: Modality, user: UserId) -> OracleResult<bool>;
}

/// Per-user settings store.
pub trait SettingsOracle {
    /// Whether biometrics are enabled for third-party apps for this user.
    fn biometrics_enabled_for_apps(&self, user: UserId) -> OracleResult<bool>;
}

/// Sensor-privacy toggle service. Applies to camera-based modalities only.
pub trait SensorPrivacyOracle {
    /// Whether the camera privacy toggle is active for this user.
    fn camera_privacy_enabled(&self, user: UserId) -> bool;
}

/// Device lock-state oracle.
pub trait LockStateOracle {
    /// Whether the user has a credential enrolled and the device considers
    /// itself secure for this user/display pairing.
    fn is_device_secure(&self, user: UserId, display: DisplayId) -> bool;
}

/// Borrowed bundle of every oracle a resolution needs.
///
/// Holding references keeps the resolver free of ownership or lifecycle
/// concerns; the surrounding service owns the real collaborators.
#[derive(Clone, Copy)]
pub struct Environment<'a> {
    /// Sensor driver queries
    pub sensors: &'a dyn SensorOracle,
    /// Administrative policy queries
    pub device_policy: &'a dyn DevicePolicyOracle,
    /// Per-user settings queries
    pub settings: &'a dyn SettingsOracle,
    /// Sensor-privacy toggle queries
    pub privacy: &'a dyn SensorPrivacyOracle,
    /// Device lock-state queries
    pub lock_state: &'a dyn LockStateOracle,
}
