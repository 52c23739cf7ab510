//! Identity-conditional gate.
//!
//! MFA enrollment binds to an identity entity record. A principal with no
//! entity (a root token, a batch token) has nothing to enroll against, so
//! the affordance must hide for it regardless of capabilities.

use crate::capability::is_visible;
use crate::catalog::NavItem;
use console_core::{CapabilitySet, Principal};
use serde::Serialize;

/// Whether the MFA-setup entry may be shown for `principal`.
///
/// Strict attribute check, independent of the capability gate: true iff
/// the principal carries an entity id. `EntityId` is non-empty by
/// construction, so presence alone decides.
pub fn is_mfa_setup_visible(principal: &Principal) -> bool {
    principal.has_entity()
}

/// The MFA-enrollment affordance, optionally capability-gated as well.
///
/// When a capability requirement is attached, both gates must agree
/// before the entry shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MfaSetupAffordance {
    /// Optional capability requirement composed with the identity check.
    pub required: Option<NavItem>,
}

impl MfaSetupAffordance {
    /// An affordance gated on identity only.
    pub fn identity_only() -> Self {
        Self { required: None }
    }

    /// Attach a capability requirement.
    pub fn with_requirement(item: NavItem) -> Self {
        Self {
            required: Some(item),
        }
    }

    /// Combined visibility decision: identity gate AND capability gate.
    pub fn is_visible(&self, principal: &Principal, capabilities: &CapabilitySet) -> bool {
        if !is_mfa_setup_visible(principal) {
            return false;
        }
        match &self.required {
            Some(item) => is_visible(item, capabilities),
            None => true,
        }
    }
}
