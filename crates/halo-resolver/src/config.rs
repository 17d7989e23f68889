//! Resolver options
//!
//! Options the surrounding service threads into each resolution. Kept small:
//! the resolver is otherwise driven entirely by the request and the oracles.

use halo_core::{HaloError, HaloResult};
use serde::{Deserialize, Serialize};

/// Per-resolution options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverOptions {
    /// Whether to consult the administrative-policy oracle. Internal callers
    /// that pre-clear policy themselves disable this to skip the query.
    pub check_device_policy: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            check_device_policy: true,
        }
    }
}

impl ResolverOptions {
    /// Parse options from TOML.
    pub fn from_toml(input: &str) -> HaloResult<Self> {
        toml::from_str(input).map_err(|e| HaloError::config(e.to_string()))
    }
}
