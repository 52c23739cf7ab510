//! Scriptable collaborator stubs.

use async_trait::async_trait;
use console_core::{
    Action, CapabilityEffects, CapabilitySet, ClusterStatus, ClusterStatusEffects, ConsoleError,
    FetchSeq, IdentityEffects, Principal, Result,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Cluster status source returning a scripted sequence of results.
///
/// Each fetch pops the next scripted result; when the script is
/// exhausted the last result repeats.
pub struct FixedStatusSource {
    script: Mutex<Vec<Result<ClusterStatus>>>,
}

impl FixedStatusSource {
    /// Always report `status`.
    pub fn always(status: ClusterStatus) -> Self {
        Self {
            script: Mutex::new(vec![Ok(status)]),
        }
    }

    /// Report each scripted result in order, repeating the last.
    pub fn sequence(results: impl IntoIterator<Item = Result<ClusterStatus>>) -> Self {
        Self {
            script: Mutex::new(results.into_iter().collect()),
        }
    }

    /// Always fail the fetch.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(vec![Err(ConsoleError::status_fetch(message))]),
        }
    }
}

#[async_trait]
impl ClusterStatusEffects for FixedStatusSource {
    async fn cluster_status(&self) -> Result<ClusterStatus> {
        let mut script = self.script.lock();
        if script.len() > 1 {
            script.remove(0)
        } else {
            script
                .first()
                .cloned()
                .unwrap_or_else(|| Err(ConsoleError::status_fetch("status script empty")))
        }
    }
}

/// Capability source backed by an allow table.
pub struct TableCapabilitySource {
    allowed: HashMap<String, Vec<Action>>,
    fail: Option<String>,
}

impl TableCapabilitySource {
    /// Grant the given actions per path; everything else denies.
    pub fn allowing(allowed: impl IntoIterator<Item = (String, Vec<Action>)>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
            fail: None,
        }
    }

    /// Deny every path.
    pub fn deny_all() -> Self {
        Self {
            allowed: HashMap::new(),
            fail: None,
        }
    }

    /// Fail every fetch.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            allowed: HashMap::new(),
            fail: Some(message.into()),
        }
    }
}

#[async_trait]
impl CapabilityEffects for TableCapabilitySource {
    async fn resolve_capabilities(
        &self,
        paths: &[String],
        seq: FetchSeq,
    ) -> Result<CapabilitySet> {
        if let Some(message) = &self.fail {
            return Err(ConsoleError::capability_fetch(message.clone()));
        }
        let verdicts = paths.iter().filter_map(|path| {
            self.allowed
                .get(path)
                .map(|actions| (path.clone(), actions.clone()))
        });
        Ok(CapabilitySet::resolved(seq, verdicts))
    }
}

/// Identity source returning a fixed principal.
pub struct FixedIdentitySource {
    principal: Principal,
}

impl FixedIdentitySource {
    /// Always report `principal`.
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }
}

#[async_trait]
impl IdentityEffects for FixedIdentitySource {
    async fn current_principal(&self) -> Result<Principal> {
        Ok(self.principal.clone())
    }
}
