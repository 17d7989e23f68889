//! Common sensor and request fixtures

use halo_core::{Modality, ModalitySet, SensorId, Strength, UserId};
use halo_resolver::{PromptRequest, SensorDescriptor};

/// The user most fixtures run as.
pub const TEST_USER: UserId = UserId(10);

/// A strong fingerprint sensor.
pub fn strong_fingerprint(id: u32) -> SensorDescriptor {
    SensorDescriptor::new(SensorId(id), Modality::Fingerprint, Strength::Strong)
}

/// A strong face sensor.
pub fn strong_face(id: u32) -> SensorDescriptor {
    SensorDescriptor::new(SensorId(id), Modality::Face, Strength::Strong)
}

/// A weak (app-unlock class) fingerprint sensor.
pub fn weak_fingerprint(id: u32) -> SensorDescriptor {
    SensorDescriptor::new(SensorId(id), Modality::Fingerprint, Strength::Weak)
}

/// Biometric-only request for [`TEST_USER`] at the given floor.
pub fn biometric_request(modalities: ModalitySet, strength: Strength) -> PromptRequest {
    PromptRequest::biometric(TEST_USER, modalities, strength)
}
