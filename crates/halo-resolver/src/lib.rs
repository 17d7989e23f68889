//! Halo Resolver - authentication-eligibility resolution
//!
//! Given a snapshot of registered sensors, a caller's prompt request, and the
//! synchronous oracle queries exposed by the surrounding platform (hardware
//! detection, enrollment, lockout, device policy, user settings, sensor
//! privacy, lock state), this crate computes:
//!
//! - which sensors may be started for the request and which must be skipped,
//!   with exactly one explanatory status per skipped sensor;
//! - the single `(modality bitmask, status)` pair describing the request as a
//!   whole, chosen deterministically when several sensors fail for different
//!   reasons;
//! - the two public presentations of that pair: a coarse capability-check
//!   code and a detailed pre-authentication result with sensitive modality
//!   detail suppressed for policy-driven refusals.
//!
//! The resolution is a pure, synchronous, single-pass computation. A
//! [`Resolution`] is built fresh per request from a [`PromptRequest`] and an
//! [`Environment`] of oracle implementations, and never mutates anything;
//! oracle failures become status values, never panics or errors.

#![forbid(unsafe_code)]

/// Per-sensor classification (the ordered eligibility check ladder)
pub mod classify;

/// Resolver options
pub mod config;

/// Public status mapping
pub mod mapper;

/// External query interfaces
pub mod oracle;

/// The caller's request snapshot
pub mod request;

/// Eligibility aggregation and priority resolution
pub mod resolution;

/// Registered-sensor descriptors
pub mod sensor;

pub use classify::classify_sensor;
pub use config::ResolverOptions;
pub use oracle::{
    DevicePolicyOracle, Environment, LockStateOracle, LockoutMode, OracleError, OracleResult,
    SensorOracle, SensorPrivacyOracle, SettingsOracle,
};
pub use request::PromptRequest;
pub use resolution::Resolution;
pub use sensor::{SensorDescriptor, SessionState};
