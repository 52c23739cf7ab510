//! Acceptance-level visibility scenarios.
//!
//! These mirror the console's browser acceptance tests: nav items and the
//! MFA-setup entry are shown or hidden depending on the logged-in
//! principal's server-evaluated capabilities and identity shape.

use console_core::{Action, TokenType};
use console_gates::{
    is_mfa_setup_visible, resolve_capabilities, sidebar_catalog, visible_items, NavItemId,
};
use console_gates::catalog::catalog_paths;
use console_testkit::{deny_policies_capabilities, PrincipalBuilder, TableCapabilitySource};

#[test]
fn hides_policies_nav_item_without_permission() {
    // Token created under a policy that denies sys/policies/*: the access
    // overview renders without the Policies link.
    let catalog = sidebar_catalog();
    let caps = deny_policies_capabilities(1);

    let visible = visible_items(&catalog, &caps);
    let ids: Vec<NavItemId> = visible.iter().map(|item| item.id).collect();
    assert!(!ids.contains(&NavItemId::Policies));
    assert!(ids.contains(&NavItemId::Access));
}

#[tokio::test]
async fn shows_policies_nav_item_with_permission() {
    let catalog = sidebar_catalog();
    let source = TableCapabilitySource::allowing([
        ("sys/policies/*".to_string(), vec![Action::Read]),
        ("sys/mounts".to_string(), vec![Action::Read]),
    ]);
    let caps = resolve_capabilities(&source, &catalog_paths(&catalog), 1).await;

    let visible = visible_items(&catalog, &caps);
    assert!(visible.iter().any(|item| item.id == NavItemId::Policies));
}

#[tokio::test]
async fn capability_fetch_failure_hides_every_gated_item() {
    let catalog = sidebar_catalog();
    let source = TableCapabilitySource::failing("backend unreachable");
    let caps = resolve_capabilities(&source, &catalog_paths(&catalog), 1).await;

    assert!(visible_items(&catalog, &caps).is_empty());
}

#[test]
fn mfa_setup_shown_for_entity_backed_user_and_hidden_for_root() {
    // A userpass login produces a principal with an associated entity;
    // the root token has none.
    let end_user = PrincipalBuilder::new("end-user")
        .token_type(TokenType::Service)
        .entity("entity-c7a41")
        .build();
    let root = PrincipalBuilder::root();

    assert!(is_mfa_setup_visible(&end_user));
    assert!(!is_mfa_setup_visible(&root));
}
