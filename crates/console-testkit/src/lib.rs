//! Test fixtures for the console navigation core.
//!
//! Provides scriptable in-memory implementations of the collaborator
//! traits plus builders for principals and capability snapshots, so
//! routing and gating tests exercise the same seams production code uses
//! without a backend.

pub mod builders;
pub mod stubs;

pub use builders::{deny_policies_capabilities, PrincipalBuilder};
pub use stubs::{FixedIdentitySource, FixedStatusSource, TableCapabilitySource};
