//! Halo Core - value types for authentication-eligibility resolution
//!
//! This crate contains the leaf vocabulary shared by the resolver and its
//! callers: sensor/user/display identifiers, the modality bitmask, ordered
//! sensor strength classes, and the closed status taxonomy that every
//! resolution terminates in. It has no policy logic of its own; the
//! resolution algorithm lives in `halo-resolver`.

#![forbid(unsafe_code)]

/// Sensor, user, and display identifiers
pub mod identifiers;

/// Authentication modalities and the combined modality bitmask
pub mod modality;

/// Ordered sensor strength classes
pub mod strength;

/// Internal and public status taxonomies
pub mod status;

/// Unified error handling
pub mod errors;

pub use errors::{HaloError, HaloResult};
pub use identifiers::{DisplayId, SensorId, UserId};
pub use modality::{Modality, ModalitySet};
pub use status::{AuthenticatorStatus, CapabilityCheck, PublicError};
pub use strength::Strength;
