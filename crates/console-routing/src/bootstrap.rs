//! Cluster bootstrap state machine.
//!
//! Walks a browser session through the ordered bootstrap sequence
//! (initialize → unseal → authenticate) and, once authenticated, resumes
//! the originally requested path or falls back to the cluster index.
//!
//! The machine is event-driven: status observations, navigation requests,
//! and authentication completions enter as discrete events tagged with a
//! fetch sequence number. Completions older than the machine's high-water
//! mark are discarded, so a response from a superseded navigation can
//! never apply a stale decision.

use crate::redirect::ExcludedRedirectSet;
use crate::registry::RouteName;
use console_core::{ClusterStatus, ClusterStatusEffects, FetchSeq, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Phase of the bootstrap machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootstrapPhase {
    /// Cluster reported uninitialized.
    Uninitialized,
    /// Cluster reported sealed.
    Sealed,
    /// Cluster unsealed, session not yet authenticated.
    Unauthenticated,
    /// Authenticated with a captured destination awaiting replay.
    RedirectPending,
    /// Authenticated and settled in the shell. Terminal.
    Settled,
}

/// Route activation emitted by a machine transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    /// The route to activate.
    pub route: RouteName,
    /// Concrete path the hosting shell should navigate to, when the
    /// route replays a captured destination.
    pub navigate_to: Option<String>,
}

impl Activation {
    fn route(route: RouteName) -> Self {
        Self {
            route,
            navigate_to: None,
        }
    }
}

/// State machine for the cluster bootstrap lifecycle.
///
/// Owns the captured original destination for the duration of one
/// bootstrap cycle. The capture is written only through the redirect
/// guard and re-validated when consumed; a destination that fails either
/// check is dropped and the session lands on the cluster index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapMachine {
    phase: BootstrapPhase,
    excluded: ExcludedRedirectSet,
    requested_path: Option<String>,
    original_destination: Option<String>,
    high_water: FetchSeq,
}

impl BootstrapMachine {
    /// Create a machine with the standard excluded-redirect set.
    pub fn new() -> Self {
        Self::with_excluded(ExcludedRedirectSet::standard())
    }

    /// Create a machine with a custom excluded-redirect set.
    pub fn with_excluded(excluded: ExcludedRedirectSet) -> Self {
        Self {
            phase: BootstrapPhase::Uninitialized,
            excluded,
            requested_path: None,
            original_destination: None,
            high_water: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    /// The captured destination, if a bootstrap cycle is holding one.
    pub fn original_destination(&self) -> Option<&str> {
        self.original_destination.as_deref()
    }

    /// Record a navigation request for `path`.
    ///
    /// Bumps the high-water mark so completions belonging to earlier
    /// navigations are discarded when they arrive. If a previous cycle was
    /// still holding a destination, that cycle is superseded and its
    /// capture abandoned.
    pub fn request_navigation(&mut self, path: impl Into<String>, seq: FetchSeq) {
        let path = path.into();
        if seq < self.high_water {
            debug!(seq, high_water = self.high_water, "stale navigation request discarded");
            return;
        }
        self.high_water = seq;
        if self.original_destination.is_some() && self.phase != BootstrapPhase::RedirectPending {
            debug!("superseding navigation abandons captured destination");
            self.original_destination = None;
        }
        self.requested_path = Some(path);
    }

    /// Apply an observed cluster status.
    ///
    /// Returns the route to activate, or `None` when the observation is
    /// stale or changes nothing. An observation of `Ready` feeds the same
    /// post-authentication transition as an explicit login completion.
    pub fn observe_status(
        &mut self,
        status: ClusterStatus,
        seq: FetchSeq,
    ) -> Result<Option<Activation>> {
        if self.is_stale(seq) {
            return Ok(None);
        }
        debug!(%status, phase = ?self.phase, "cluster status observed");
        match status {
            ClusterStatus::Uninitialized => {
                self.phase = BootstrapPhase::Uninitialized;
                Ok(Some(Activation::route(RouteName::Init)))
            }
            ClusterStatus::Sealed => {
                self.phase = BootstrapPhase::Sealed;
                Ok(Some(Activation::route(RouteName::Unseal)))
            }
            ClusterStatus::Unauthenticated => {
                self.phase = BootstrapPhase::Unauthenticated;
                self.capture_destination();
                Ok(Some(Activation::route(RouteName::Auth)))
            }
            ClusterStatus::Ready => self.authentication_succeeded(seq),
        }
    }

    /// Apply a successful authentication completion.
    ///
    /// Consumes the captured destination exactly once: the first
    /// completion navigates to it (via the redirect route) and clears it;
    /// a repeated completion in the settled phase is a no-op. OIDC
    /// terminals feed their completions through this same transition.
    pub fn authentication_succeeded(&mut self, seq: FetchSeq) -> Result<Option<Activation>> {
        if self.is_stale(seq) {
            return Ok(None);
        }
        match self.original_destination.take() {
            Some(destination) => {
                // Consumption re-validates; the set may have broadened
                // since capture.
                if self.excluded.is_redirect_safe(&destination) {
                    self.phase = BootstrapPhase::RedirectPending;
                    Ok(Some(Activation {
                        route: RouteName::Redirect,
                        navigate_to: Some(destination),
                    }))
                } else {
                    warn!(path = %destination, "unsafe redirect target discarded");
                    self.phase = BootstrapPhase::Settled;
                    Ok(Some(Activation::route(RouteName::ClusterIndex)))
                }
            }
            None => match self.phase {
                // Redirect already issued or session already settled; a
                // repeated completion must not re-navigate.
                BootstrapPhase::RedirectPending | BootstrapPhase::Settled => Ok(None),
                _ => {
                    self.phase = BootstrapPhase::Settled;
                    Ok(Some(Activation::route(RouteName::ClusterIndex)))
                }
            },
        }
    }

    /// Acknowledge that the hosting shell applied the redirect navigation.
    pub fn redirect_completed(&mut self, seq: FetchSeq) {
        if self.is_stale(seq) {
            return;
        }
        if self.phase == BootstrapPhase::RedirectPending {
            self.phase = BootstrapPhase::Settled;
        }
    }

    /// Fetch the cluster status from `source` and apply it.
    ///
    /// A fetch failure leaves the machine in its last known phase and
    /// propagates the error; retry and backoff belong to the caller.
    pub async fn advance(
        &mut self,
        source: &dyn ClusterStatusEffects,
        seq: FetchSeq,
    ) -> Result<Option<Activation>> {
        let status = source.cluster_status().await?;
        self.observe_status(status, seq)
    }

    fn capture_destination(&mut self) {
        if self.phase == BootstrapPhase::RedirectPending {
            return;
        }
        let Some(path) = self.requested_path.clone() else {
            return;
        };
        if self.excluded.is_redirect_safe(&path) {
            self.original_destination = Some(path);
        } else {
            warn!(%path, "requested path excluded from redirect capture");
            self.original_destination = None;
        }
    }

    fn is_stale(&mut self, seq: FetchSeq) -> bool {
        if seq < self.high_water {
            debug!(seq, high_water = self.high_water, "stale completion discarded");
            return true;
        }
        self.high_water = seq;
        false
    }
}

impl Default for BootstrapMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_bootstrap_sequence_activations() {
        let mut machine = BootstrapMachine::new();

        let init = machine.observe_status(ClusterStatus::Uninitialized, 1).unwrap();
        assert_matches!(init, Some(Activation { route: RouteName::Init, .. }));
        assert_eq!(machine.phase(), BootstrapPhase::Uninitialized);

        let unseal = machine.observe_status(ClusterStatus::Sealed, 2).unwrap();
        assert_matches!(unseal, Some(Activation { route: RouteName::Unseal, .. }));

        let auth = machine.observe_status(ClusterStatus::Unauthenticated, 3).unwrap();
        assert_matches!(auth, Some(Activation { route: RouteName::Auth, .. }));
        assert_eq!(machine.phase(), BootstrapPhase::Unauthenticated);
    }

    #[test]
    fn test_redirect_round_trip_consumes_destination_once() {
        let mut machine = BootstrapMachine::new();
        machine.request_navigation("/vault/secrets/kv/show", 1);
        machine.observe_status(ClusterStatus::Unauthenticated, 1).unwrap();
        assert_eq!(machine.original_destination(), Some("/vault/secrets/kv/show"));

        let first = machine.authentication_succeeded(2).unwrap().unwrap();
        assert_eq!(first.route, RouteName::Redirect);
        assert_eq!(first.navigate_to.as_deref(), Some("/vault/secrets/kv/show"));
        assert_eq!(machine.original_destination(), None);
        assert_eq!(machine.phase(), BootstrapPhase::RedirectPending);

        // Second completion must not re-navigate.
        assert_eq!(machine.authentication_succeeded(3).unwrap(), None);

        machine.redirect_completed(4);
        assert_eq!(machine.phase(), BootstrapPhase::Settled);
    }

    #[test]
    fn test_login_without_destination_lands_on_cluster_index() {
        let mut machine = BootstrapMachine::new();
        machine.observe_status(ClusterStatus::Unauthenticated, 1).unwrap();
        let landed = machine.authentication_succeeded(2).unwrap().unwrap();
        assert_eq!(landed.route, RouteName::ClusterIndex);
        assert_eq!(landed.navigate_to, None);
    }

    #[test]
    fn test_logout_path_is_never_captured() {
        let mut machine = BootstrapMachine::new();
        machine.request_navigation("/vault/logout", 1);
        machine.observe_status(ClusterStatus::Unauthenticated, 1).unwrap();
        assert_eq!(machine.original_destination(), None);

        let landed = machine.authentication_succeeded(2).unwrap().unwrap();
        assert_eq!(landed.route, RouteName::ClusterIndex);
    }

    #[test]
    fn test_consumption_revalidates_against_broadened_set() {
        // Captured under the standard set, consumed after the set widened
        // to prefix matching: the destination is dropped, not replayed.
        let mut machine =
            BootstrapMachine::with_excluded(ExcludedRedirectSet::standard().with_prefix_matching());
        machine.request_navigation("/vault/secrets", 1);
        machine.observe_status(ClusterStatus::Unauthenticated, 1).unwrap();
        machine.original_destination = Some("/vault/logout/confirm".to_string());

        let landed = machine.authentication_succeeded(2).unwrap().unwrap();
        assert_eq!(landed.route, RouteName::ClusterIndex);
        assert_eq!(landed.navigate_to, None);
    }

    #[test]
    fn test_stale_completions_are_discarded() {
        let mut machine = BootstrapMachine::new();
        machine.request_navigation("/vault/secrets", 5);
        assert_eq!(machine.observe_status(ClusterStatus::Sealed, 3).unwrap(), None);
        assert_eq!(machine.phase(), BootstrapPhase::Uninitialized);

        let current = machine.observe_status(ClusterStatus::Unauthenticated, 5).unwrap();
        assert_matches!(current, Some(Activation { route: RouteName::Auth, .. }));
    }

    #[test]
    fn test_superseding_navigation_abandons_previous_capture() {
        let mut machine = BootstrapMachine::new();
        machine.request_navigation("/vault/secrets", 1);
        machine.observe_status(ClusterStatus::Unauthenticated, 1).unwrap();
        assert_eq!(machine.original_destination(), Some("/vault/secrets"));

        machine.request_navigation("/vault/access", 2);
        machine.observe_status(ClusterStatus::Unauthenticated, 2).unwrap();
        assert_eq!(machine.original_destination(), Some("/vault/access"));

        let replay = machine.authentication_succeeded(3).unwrap().unwrap();
        assert_eq!(replay.navigate_to.as_deref(), Some("/vault/access"));
    }

    #[test]
    fn test_ready_status_feeds_post_auth_transition() {
        let mut machine = BootstrapMachine::new();
        machine.request_navigation("/vault/tools", 1);
        machine.observe_status(ClusterStatus::Unauthenticated, 1).unwrap();

        let replay = machine.observe_status(ClusterStatus::Ready, 2).unwrap().unwrap();
        assert_eq!(replay.route, RouteName::Redirect);
        assert_eq!(replay.navigate_to.as_deref(), Some("/vault/tools"));
    }
}
