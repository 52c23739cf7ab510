//! Navigation item catalog.
//!
//! Each sidebar affordance declares the backend (path, action) pairs it
//! requires. Visibility is always derived from a resolved capability
//! snapshot, never stored on the item.

use console_core::{Action, PathCapability};
use serde::{Deserialize, Serialize};

/// Identifier of a sidebar navigation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavItemId {
    /// Secrets engines listing.
    Secrets,
    /// Access management (auth methods, entities, groups).
    Access,
    /// ACL policy management.
    Policies,
    /// Operational tools (wrap, unwrap, random, hash).
    Tools,
}

/// A sidebar affordance with its required capability predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Stable identifier.
    pub id: NavItemId,
    /// Label shown in the sidebar.
    pub label: &'static str,
    /// Backend verdicts that must all be allowed for the item to show.
    pub required: Vec<PathCapability>,
}

impl NavItem {
    /// Paths this item needs verdicts for, in declaration order.
    pub fn required_paths(&self) -> Vec<String> {
        self.required.iter().map(|cap| cap.path.clone()).collect()
    }
}

/// The standard sidebar catalog.
pub fn sidebar_catalog() -> Vec<NavItem> {
    vec![
        NavItem {
            id: NavItemId::Secrets,
            label: "Secrets",
            required: vec![PathCapability::new("sys/mounts", Action::Read)],
        },
        NavItem {
            id: NavItemId::Access,
            label: "Access",
            required: vec![PathCapability::new("sys/auth", Action::Read)],
        },
        NavItem {
            id: NavItemId::Policies,
            label: "Policies",
            required: vec![PathCapability::new("sys/policies/*", Action::Read)],
        },
        NavItem {
            id: NavItemId::Tools,
            label: "Tools",
            required: vec![PathCapability::new("sys/wrapping/wrap", Action::Update)],
        },
    ]
}

/// Every path the standard catalog needs verdicts for, deduplicated.
pub fn catalog_paths(catalog: &[NavItem]) -> Vec<String> {
    let mut paths: Vec<String> = catalog.iter().flat_map(NavItem::required_paths).collect();
    paths.sort();
    paths.dedup();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policies_item_requires_policy_read() {
        let catalog = sidebar_catalog();
        let policies = catalog
            .iter()
            .find(|item| item.id == NavItemId::Policies)
            .unwrap();
        assert_eq!(
            policies.required,
            vec![PathCapability::new("sys/policies/*", Action::Read)]
        );
    }

    #[test]
    fn test_catalog_paths_are_deduplicated_and_sorted() {
        let paths = catalog_paths(&sidebar_catalog());
        let mut sorted = paths.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(paths, sorted);
    }
}
