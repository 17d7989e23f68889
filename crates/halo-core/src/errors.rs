//! Unified error system for Halo
//!
//! The resolver itself never fails — every external-query failure is folded
//! into an [`crate::status::AuthenticatorStatus`] value. This error type
//! covers the edges around it: invalid caller input, malformed configuration,
//! and diagnostics serialization.

use serde::{Deserialize, Serialize};

/// Unified error type for Halo operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum HaloError {
    /// Invalid input or request shape
    #[error("Invalid: {message}")]
    Invalid {
        /// Description of the invalid input
        message: String,
    },

    /// Malformed or unreadable configuration
    #[error("Config error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure
        message: String,
    },
}

impl HaloError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Result type alias for Halo operations
pub type HaloResult<T> = Result<T, HaloError>;
