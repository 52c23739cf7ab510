//! Collaborator trait interfaces.
//!
//! Each external subsystem the navigation core consults is modeled as an
//! async trait. Production implementations call the backend over HTTP; test
//! implementations live in `console-testkit`. Every method is awaited from
//! the event loop and its completion re-enters the navigation core as a
//! discrete event, so none of these may block.

mod capability;
mod identity;
mod status;

pub use capability::CapabilityEffects;
pub use identity::IdentityEffects;
pub use status::ClusterStatusEffects;
