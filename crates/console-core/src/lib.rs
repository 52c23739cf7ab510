//! Shared foundation for the console navigation core.
//!
//! This crate holds the types every other console crate builds on: the
//! unified error type, the cluster lifecycle status, principal and identity
//! types, the resolved capability snapshot, and the async trait interfaces
//! for the external collaborators (cluster status, authorization verdicts,
//! identity lookup).
//!
//! The console core never evaluates policy itself: capability verdicts
//! arrive pre-computed from the backend and are consumed as opaque
//! allow/deny decisions.

pub mod capabilities;
pub mod effects;
pub mod errors;
pub mod principal;
pub mod status;

pub use capabilities::{Action, CapabilitySet, FetchSeq, PathCapability};
pub use effects::{CapabilityEffects, ClusterStatusEffects, IdentityEffects};
pub use errors::{ConsoleError, Result};
pub use principal::{EntityId, Principal, TokenType};
pub use status::ClusterStatus;
