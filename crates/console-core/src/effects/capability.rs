//! Authorization verdict collaborator interface.

use crate::capabilities::{Action, CapabilitySet, FetchSeq};
use crate::errors::Result;
use async_trait::async_trait;

/// Source of pre-evaluated capability verdicts.
///
/// The backend policy engine is the only evaluator; this interface returns
/// its verdicts as a complete snapshot. Implementations must resolve every
/// requested path before returning — a partial snapshot is never valid.
#[async_trait]
pub trait CapabilityEffects: Send + Sync {
    /// Resolve the session's granted actions for each of `paths`.
    ///
    /// The returned set carries `seq` so stale completions can be
    /// discarded by the caller.
    async fn resolve_capabilities(&self, paths: &[String], seq: FetchSeq)
        -> Result<CapabilitySet>;

    /// Resolve a single (path, action) verdict.
    async fn check(&self, path: &str, action: Action, seq: FetchSeq) -> Result<bool> {
        let paths = [path.to_string()];
        let set = self.resolve_capabilities(&paths, seq).await?;
        Ok(set.allows(path, action))
    }
}
