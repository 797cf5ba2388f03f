//! Process-wide host identity.
//!
//! The identity is resolved once by whoever wires the appender together and
//! handed to strategies by value. Nothing reads it from global state.

use crate::{Error, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// The host name records are attributed to, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostIdentity(Arc<str>);

impl HostIdentity {
    pub fn new(identity: impl AsRef<str>) -> Self {
        Self(Arc::from(identity.as_ref()))
    }

    /// The unset identity. Hashes to `0`.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Looks up the system host name.
    pub fn from_system() -> Result<Self> {
        let name = hostname::get().map_err(Error::HostIdentity)?;
        Ok(Self::new(name.to_string_lossy()))
    }

    /// Resolves the identity for this process.
    ///
    /// A configured identity takes precedence over the system host name. If
    /// neither is available the empty identity is used.
    pub fn resolve(configured: Option<&str>) -> Self {
        if let Some(identity) = configured {
            debug!(host_identity = %identity, "Using configured host identity");
            return Self::new(identity);
        }

        match Self::from_system() {
            Ok(identity) => {
                debug!(host_identity = %identity, "Resolved host identity from system");
                identity
            }
            Err(e) => {
                warn!("Failed to resolve host name, using empty host identity: {}", e);
                Self::empty()
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for HostIdentity {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for HostIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HostIdentity {
    fn from(identity: &str) -> Self {
        Self::new(identity)
    }
}

impl From<String> for HostIdentity {
    fn from(identity: String) -> Self {
        Self(Arc::from(identity))
    }
}
