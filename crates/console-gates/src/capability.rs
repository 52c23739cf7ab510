//! Capability gate.
//!
//! Visibility is a pure function of a nav item and a fully-resolved
//! capability snapshot. The snapshot is fetched before any gating
//! decision is rendered; a failed fetch degrades to the deny-all
//! snapshot so every gated item hides (fail closed, never open).

use crate::catalog::NavItem;
use console_core::{CapabilityEffects, CapabilitySet, FetchSeq};
use tracing::warn;

/// Whether `item` may be shown under the resolved `capabilities`.
pub fn is_visible(item: &NavItem, capabilities: &CapabilitySet) -> bool {
    capabilities.allows_all(&item.required)
}

/// Filter a catalog down to the items visible under `capabilities`.
pub fn visible_items<'a>(
    catalog: &'a [NavItem],
    capabilities: &CapabilitySet,
) -> Vec<&'a NavItem> {
    catalog
        .iter()
        .filter(|item| is_visible(item, capabilities))
        .collect()
}

/// Resolve capability verdicts for `paths`, failing closed.
///
/// On fetch failure the deny-all snapshot is returned in its place, so
/// callers always gate against a complete set.
pub async fn resolve_capabilities(
    source: &dyn CapabilityEffects,
    paths: &[String],
    seq: FetchSeq,
) -> CapabilitySet {
    match source.resolve_capabilities(paths, seq).await {
        Ok(set) => set,
        Err(error) => {
            warn!(%error, "capability fetch failed, gating fails closed");
            CapabilitySet::deny_all(seq)
        }
    }
}
