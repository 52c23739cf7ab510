//! Principal and identity types.
//!
//! The authenticated actor is always passed explicitly into gating
//! decisions; nothing here reads ambient session state. This keeps both
//! gates deterministic and testable in parallel.

use serde::{Deserialize, Serialize};

/// Identifier of the identity entity record backing a principal.
///
/// Invariant: non-empty. Root and batch tokens typically have no entity
/// record at all, which is modeled as `Option<EntityId>` on [`Principal`],
/// never as an empty id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Construct an entity id, rejecting empty strings.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of the token backing the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Ordinary service token issued by an auth method.
    Service,
    /// Batch token; not persisted server-side and entity-less.
    Batch,
    /// The root token. No entity record is ever associated with it.
    Root,
}

/// The authenticated actor for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Display name of the token accessor, for logging only.
    pub display_name: String,
    /// Entity record backing this principal, when one exists.
    pub entity_id: Option<EntityId>,
    /// Token classification.
    pub token_type: TokenType,
}

impl Principal {
    /// A principal backed by an identity entity.
    pub fn with_entity(
        display_name: impl Into<String>,
        token_type: TokenType,
        entity_id: EntityId,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            entity_id: Some(entity_id),
            token_type,
        }
    }

    /// A principal with no entity record, such as a root-token session.
    pub fn without_entity(display_name: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            display_name: display_name.into(),
            entity_id: None,
            token_type,
        }
    }

    /// Whether this principal is backed by an identity entity record.
    pub fn has_entity(&self) -> bool {
        self.entity_id.is_some()
    }
}
