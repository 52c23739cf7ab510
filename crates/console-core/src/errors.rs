//! Unified error system for the console core.
//!
//! One error type serves every console crate. The variants follow the
//! navigation failure taxonomy: programmer errors (unknown route names)
//! are distinct from transient backend failures (status or capability
//! fetches) so callers can branch on recoverability instead of string
//! matching.

use serde::{Deserialize, Serialize};

/// Unified error type for console navigation operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ConsoleError {
    /// A route name outside the closed route enumeration was supplied.
    ///
    /// This is a programmer error: the registry is total over the
    /// enumeration, so an unknown name indicates a missing entry or a raw
    /// string that escaped boundary validation.
    #[error("Unknown route: {name}")]
    UnknownRoute {
        /// The route identifier that failed to resolve.
        name: String,
    },

    /// The cluster status fetch failed.
    ///
    /// Transient: the bootstrap machine holds its last known state and the
    /// caller decides whether to retry.
    #[error("Cluster status fetch failed: {message}")]
    StatusFetch {
        /// Description of the fetch failure.
        message: String,
    },

    /// The capability verdict fetch failed.
    ///
    /// Gated UI items fail closed when this occurs: the deny-all snapshot
    /// replaces the missing verdicts.
    #[error("Capability fetch failed: {message}")]
    CapabilityFetch {
        /// Description of the fetch failure.
        message: String,
    },

    /// A post-login redirect target matched the excluded-path set.
    ///
    /// Not fatal: the captured destination is dropped and navigation lands
    /// on the cluster index instead.
    #[error("Unsafe redirect target: {path}")]
    UnsafeRedirect {
        /// The rejected redirect path.
        path: String,
    },

    /// Invalid input or state for the requested operation.
    #[error("Invalid: {message}")]
    Invalid {
        /// Description of the invalid input.
        message: String,
    },

    /// Internal invariant violation.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl ConsoleError {
    /// Create an unknown-route error.
    pub fn unknown_route(name: impl Into<String>) -> Self {
        Self::UnknownRoute { name: name.into() }
    }

    /// Create a status-fetch error.
    pub fn status_fetch(message: impl Into<String>) -> Self {
        Self::StatusFetch {
            message: message.into(),
        }
    }

    /// Create a capability-fetch error.
    pub fn capability_fetch(message: impl Into<String>) -> Self {
        Self::CapabilityFetch {
            message: message.into(),
        }
    }

    /// Create an unsafe-redirect error.
    pub fn unsafe_redirect(path: impl Into<String>) -> Self {
        Self::UnsafeRedirect { path: path.into() }
    }

    /// Create an invalid-input error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error is transient and the operation may be retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StatusFetch { .. } | Self::CapabilityFetch { .. })
    }
}

/// Standard Result type for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;
