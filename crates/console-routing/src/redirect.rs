//! Redirect denylist guard.
//!
//! A captured destination that points at the logout endpoint would bounce
//! the session through a logout → login → logout loop. Every write to the
//! captured destination passes through this guard, and consumption
//! re-validates it.

use console_core::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Paths that must never become a post-login redirect target.
///
/// Exact literal contract with the hosting shell.
pub const EXCLUDED_REDIRECT_URLS: [&str; 1] = ["/vault/logout"];

/// Matching discipline for the excluded-path set.
///
/// Exact matching is the contract today; prefix matching is an explicit
/// opt-in so broadening the policy is a deliberate call-site change rather
/// than an inferred behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum MatchMode {
    Exact,
    Prefix,
}

/// Denylist of paths excluded from post-login redirects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedRedirectSet {
    paths: BTreeSet<String>,
    mode: MatchMode,
}

impl ExcludedRedirectSet {
    /// The standard set: exact matching over [`EXCLUDED_REDIRECT_URLS`].
    pub fn standard() -> Self {
        Self {
            paths: EXCLUDED_REDIRECT_URLS
                .iter()
                .map(|path| (*path).to_string())
                .collect(),
            mode: MatchMode::Exact,
        }
    }

    /// An exact-match set over the given paths.
    pub fn exact(paths: impl IntoIterator<Item = String>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
            mode: MatchMode::Exact,
        }
    }

    /// Switch the set to prefix matching.
    ///
    /// A path is then unsafe if any excluded entry is a prefix of it.
    pub fn with_prefix_matching(mut self) -> Self {
        self.mode = MatchMode::Prefix;
        self
    }

    /// Whether `path` may be used as a post-login redirect target.
    pub fn is_redirect_safe(&self, path: &str) -> bool {
        match self.mode {
            MatchMode::Exact => !self.paths.contains(path),
            MatchMode::Prefix => !self.paths.iter().any(|excluded| path.starts_with(excluded)),
        }
    }

    /// Error-propagating form of [`Self::is_redirect_safe`], for callers
    /// that treat an unsafe target as a failure instead of a silent drop.
    pub fn ensure_safe(&self, path: &str) -> Result<()> {
        if self.is_redirect_safe(path) {
            Ok(())
        } else {
            Err(ConsoleError::unsafe_redirect(path))
        }
    }
}

impl Default for ExcludedRedirectSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_logout_is_never_safe() {
        let set = ExcludedRedirectSet::standard();
        assert!(!set.is_redirect_safe("/vault/logout"));
    }

    #[test]
    fn test_exact_match_does_not_catch_suffixed_paths() {
        let set = ExcludedRedirectSet::standard();
        assert!(set.is_redirect_safe("/vault/logout/confirm"));
        assert!(set.is_redirect_safe("/vault/secrets"));
    }

    #[test]
    fn test_ensure_safe_propagates_unsafe_redirect() {
        let set = ExcludedRedirectSet::standard();
        assert!(set.ensure_safe("/vault/secrets").is_ok());
        let err = set.ensure_safe("/vault/logout").unwrap_err();
        assert!(matches!(
            err,
            console_core::ConsoleError::UnsafeRedirect { path } if path == "/vault/logout"
        ));
    }

    #[test]
    fn test_prefix_matching_catches_suffixed_paths() {
        let set = ExcludedRedirectSet::standard().with_prefix_matching();
        assert!(!set.is_redirect_safe("/vault/logout"));
        assert!(!set.is_redirect_safe("/vault/logout/confirm"));
        assert!(set.is_redirect_safe("/vault/secrets"));
    }

    proptest! {
        #[test]
        fn prop_exact_mode_only_rejects_exact_members(path in "/[a-z/]{0,24}") {
            let set = ExcludedRedirectSet::standard();
            prop_assert_eq!(set.is_redirect_safe(&path), path != "/vault/logout");
        }
    }
}
