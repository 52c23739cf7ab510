//! Cluster lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of the secrets cluster as reported by the backend.
///
/// Re-derived on every navigation decision; a value observed for one
/// decision is never reused for a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterStatus {
    /// The cluster has not been initialized.
    Uninitialized,
    /// The cluster is initialized but sealed.
    Sealed,
    /// The cluster is unsealed but the session holds no valid token.
    Unauthenticated,
    /// The cluster is unsealed and the session is authenticated.
    Ready,
}

impl ClusterStatus {
    /// Whether this status requires a bootstrap step before the
    /// authenticated shell can be shown.
    pub fn needs_bootstrap(&self) -> bool {
        !matches!(self, Self::Ready)
    }

    /// Whether an authenticated shell may be rendered.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl std::fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Uninitialized => "uninitialized",
            Self::Sealed => "sealed",
            Self::Unauthenticated => "unauthenticated",
            Self::Ready => "ready",
        };
        write!(f, "{label}")
    }
}
