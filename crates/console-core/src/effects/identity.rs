//! Identity collaborator interface.

use crate::errors::Result;
use crate::principal::Principal;
use async_trait::async_trait;

/// Source of the current session's principal.
#[async_trait]
pub trait IdentityEffects: Send + Sync {
    /// Fetch the authenticated principal, including its entity linkage
    /// and token classification.
    async fn current_principal(&self) -> Result<Principal>;
}
