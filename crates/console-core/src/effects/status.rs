//! Cluster status collaborator interface.

use crate::errors::Result;
use crate::status::ClusterStatus;
use async_trait::async_trait;

/// Source of the cluster lifecycle status.
///
/// The status is fetched fresh for every navigation decision. A fetch
/// failure is surfaced as [`crate::ConsoleError::StatusFetch`]; the caller
/// decides whether and when to retry — this interface never retries
/// internally.
#[async_trait]
pub trait ClusterStatusEffects: Send + Sync {
    /// Fetch the current cluster status.
    async fn cluster_status(&self) -> Result<ClusterStatus>;
}
