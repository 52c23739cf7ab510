//! Cluster-lifecycle routing for the console.
//!
//! Three pieces cooperate here:
//!
//! - [`registry`]: the closed table of symbolic route names and their
//!   descriptors. Pure data, total over the enumeration.
//! - [`redirect`]: the denylist guard that keeps sensitive paths (the
//!   logout endpoint) from ever becoming a post-login redirect target.
//! - [`bootstrap`]: the state machine that walks an unauthenticated
//!   session through initialize → unseal → authenticate and then resumes
//!   the originally requested path.

pub mod bootstrap;
pub mod redirect;
pub mod registry;

pub use bootstrap::{Activation, BootstrapMachine, BootstrapPhase};
pub use redirect::ExcludedRedirectSet;
pub use registry::{RouteDescriptor, RouteName, RouteRegistry, RouteStage};
