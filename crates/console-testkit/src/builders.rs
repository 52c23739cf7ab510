//! Fixture builders.

use console_core::{Action, CapabilitySet, EntityId, Principal, TokenType};

/// Builder for test principals.
///
/// Defaults to a service token with no entity record; attach one with
/// [`PrincipalBuilder::entity`].
#[derive(Debug, Clone)]
pub struct PrincipalBuilder {
    display_name: String,
    token_type: TokenType,
    entity_id: Option<EntityId>,
}

impl PrincipalBuilder {
    /// Start a builder for a principal named `display_name`.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            token_type: TokenType::Service,
            entity_id: None,
        }
    }

    /// The root principal: root token, no entity record.
    pub fn root() -> Principal {
        Self::new("root").token_type(TokenType::Root).build()
    }

    /// Set the token classification.
    pub fn token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Attach an entity record.
    ///
    /// # Panics
    /// Panics if `entity_id` is empty; fixtures should name real entities.
    pub fn entity(mut self, entity_id: &str) -> Self {
        self.entity_id = Some(
            EntityId::new(entity_id).unwrap_or_else(|| panic!("empty entity id in fixture")),
        );
        self
    }

    /// Build the principal.
    pub fn build(self) -> Principal {
        Principal {
            display_name: self.display_name,
            entity_id: self.entity_id,
            token_type: self.token_type,
        }
    }
}

/// Capability snapshot for a token whose policy denies `sys/policies/*`
/// but can otherwise browse the shell.
///
/// Mirrors the acceptance fixture that creates a token under a policy
/// with `capabilities = ["deny"]` on `sys/policies/*`.
pub fn deny_policies_capabilities(seq: u64) -> CapabilitySet {
    CapabilitySet::resolved(
        seq,
        [
            ("sys/mounts".to_string(), vec![Action::Read]),
            ("sys/auth".to_string(), vec![Action::Read]),
            ("sys/wrapping/wrap".to_string(), vec![Action::Update]),
        ],
    )
}
