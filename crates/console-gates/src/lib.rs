//! Server-evaluated visibility gates for console UI affordances.
//!
//! Two independent gates decide what the authenticated shell shows:
//!
//! - the capability gate ([`capability`]) hides navigation items whose
//!   required (path, action) pairs the backend denied, failing closed
//!   when the verdict fetch itself fails;
//! - the identity gate ([`identity`]) hides the MFA-enrollment entry for
//!   principals with no identity entity record, such as root-token
//!   sessions.
//!
//! Both gates are pure functions of explicit inputs; nothing here reads
//! ambient session state.

pub mod capability;
pub mod catalog;
pub mod identity;

pub use capability::{is_visible, resolve_capabilities, visible_items};
pub use catalog::{sidebar_catalog, NavItem, NavItemId};
pub use identity::{is_mfa_setup_visible, MfaSetupAffordance};
