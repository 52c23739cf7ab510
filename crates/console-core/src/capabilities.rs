//! Resolved capability snapshots.
//!
//! The backend authorization engine is the only policy evaluator; the
//! console receives its verdicts as opaque allow/deny pairs and never
//! re-derives them. A [`CapabilitySet`] can only be constructed complete,
//! so gating decisions never run against a partially loaded fetch — the
//! source of flash-of-wrong-content bugs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sequence number of the fetch that produced a capability snapshot.
///
/// Monotonically increasing per navigation cycle; completions carrying a
/// stale sequence are discarded rather than applied.
pub type FetchSeq = u64;

/// Action verbs the backend evaluates per path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Create a resource at the path.
    Create,
    /// Read the resource at the path.
    Read,
    /// Update the resource at the path.
    Update,
    /// Delete the resource at the path.
    Delete,
    /// List children of the path.
    List,
    /// Privileged operations on the path.
    Sudo,
}

/// A single (path, action) requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathCapability {
    /// Backend API path the verdict applies to.
    pub path: String,
    /// Action requested on that path.
    pub action: Action,
}

impl PathCapability {
    /// Build a requirement for `action` on `path`.
    pub fn new(path: impl Into<String>, action: Action) -> Self {
        Self {
            path: path.into(),
            action,
        }
    }
}

/// A fully-resolved allow/deny snapshot for one fetch.
///
/// Lookup misses deny: a path the fetch did not cover is treated exactly
/// like an explicit deny, so a truncated or failed fetch can never widen
/// visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    verdicts: HashMap<String, Vec<Action>>,
    seq: FetchSeq,
}

impl CapabilitySet {
    /// Construct a snapshot from resolved verdicts.
    ///
    /// `allowed` maps each fetched path to the actions the backend granted
    /// on it. Paths with an empty action list are equivalent to explicit
    /// denies.
    pub fn resolved(
        seq: FetchSeq,
        allowed: impl IntoIterator<Item = (String, Vec<Action>)>,
    ) -> Self {
        Self {
            verdicts: allowed.into_iter().collect(),
            seq,
        }
    }

    /// The deny-all snapshot, used when the capability fetch fails.
    pub fn deny_all(seq: FetchSeq) -> Self {
        Self {
            verdicts: HashMap::new(),
            seq,
        }
    }

    /// Sequence number of the fetch that produced this snapshot.
    pub fn seq(&self) -> FetchSeq {
        self.seq
    }

    /// Whether the backend allowed `action` on `path`.
    pub fn allows(&self, path: &str, action: Action) -> bool {
        self.verdicts
            .get(path)
            .is_some_and(|actions| actions.contains(&action) || actions.contains(&Action::Sudo))
    }

    /// Whether every requirement in `required` is allowed.
    pub fn allows_all(&self, required: &[PathCapability]) -> bool {
        required.iter().all(|cap| self.allows(&cap.path, cap.action))
    }
}
