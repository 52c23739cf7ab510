//! Symbolic route registry.
//!
//! Route names form a closed enumeration with a total resolver: every
//! variant has a descriptor, and raw strings are rejected at the boundary
//! instead of propagating through navigation logic. The dotted identifier
//! strings are a stable external contract and must not be renamed without
//! a migration.

use console_core::{ConsoleError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Symbolic name of a console route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteName {
    /// Cluster initialization form.
    Init,
    /// Unseal-key entry form.
    Unseal,
    /// Login form.
    Auth,
    /// Transient route that replays a captured destination after login.
    Redirect,
    /// The authenticated cluster shell.
    Cluster,
    /// Default landing page inside the shell.
    ClusterIndex,
    /// OIDC callback terminal.
    OidcCallback,
    /// OIDC provider authorize endpoint.
    OidcProvider,
    /// Namespaced OIDC provider authorize endpoint.
    NsOidcProvider,
}

impl RouteName {
    /// All route names, in lifecycle order.
    pub const ALL: [RouteName; 9] = [
        RouteName::Init,
        RouteName::Unseal,
        RouteName::Auth,
        RouteName::Redirect,
        RouteName::Cluster,
        RouteName::ClusterIndex,
        RouteName::OidcCallback,
        RouteName::OidcProvider,
        RouteName::NsOidcProvider,
    ];

    /// The stable dotted identifier for this route.
    pub fn id(&self) -> &'static str {
        match self {
            RouteName::Init => "vault.cluster.init",
            RouteName::Unseal => "vault.cluster.unseal",
            RouteName::Auth => "vault.cluster.auth",
            RouteName::Redirect => "vault.cluster.redirect",
            RouteName::Cluster => "vault.cluster",
            RouteName::ClusterIndex => "vault.cluster.index",
            RouteName::OidcCallback => "vault.cluster.oidc-callback",
            RouteName::OidcProvider => "vault.cluster.oidc-provider",
            RouteName::NsOidcProvider => "vault.cluster.oidc-provider-ns",
        }
    }
}

impl FromStr for RouteName {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        RouteName::ALL
            .iter()
            .copied()
            .find(|name| name.id() == s)
            .ok_or_else(|| ConsoleError::unknown_route(s))
    }
}

impl std::fmt::Display for RouteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Where a route sits in the bootstrap/lifecycle graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteStage {
    /// Part of the ordered bootstrap sequence shown before authentication.
    Bootstrap,
    /// Alternate authentication terminal for OIDC flows.
    OidcTerminal,
    /// Inside the authenticated shell.
    Shell,
}

/// Descriptor for a registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    /// The symbolic name this descriptor belongs to.
    pub name: RouteName,
    /// URL path pattern the hosting shell maps this route to.
    pub url_pattern: &'static str,
    /// Lifecycle classification.
    pub stage: RouteStage,
}

static ROUTES: Lazy<Vec<RouteDescriptor>> = Lazy::new(|| {
    vec![
        RouteDescriptor {
            name: RouteName::Init,
            url_pattern: "/vault/init",
            stage: RouteStage::Bootstrap,
        },
        RouteDescriptor {
            name: RouteName::Unseal,
            url_pattern: "/vault/unseal",
            stage: RouteStage::Bootstrap,
        },
        RouteDescriptor {
            name: RouteName::Auth,
            url_pattern: "/vault/auth",
            stage: RouteStage::Bootstrap,
        },
        RouteDescriptor {
            name: RouteName::Redirect,
            url_pattern: "/vault/redirect",
            stage: RouteStage::Bootstrap,
        },
        RouteDescriptor {
            name: RouteName::Cluster,
            url_pattern: "/vault",
            stage: RouteStage::Shell,
        },
        RouteDescriptor {
            name: RouteName::ClusterIndex,
            url_pattern: "/vault/dashboard",
            stage: RouteStage::Shell,
        },
        RouteDescriptor {
            name: RouteName::OidcCallback,
            url_pattern: "/vault/auth/oidc/callback",
            stage: RouteStage::OidcTerminal,
        },
        RouteDescriptor {
            name: RouteName::OidcProvider,
            url_pattern: "/vault/identity/oidc/provider/authorize",
            stage: RouteStage::OidcTerminal,
        },
        RouteDescriptor {
            name: RouteName::NsOidcProvider,
            url_pattern: "/vault/identity/oidc/provider/authorize-ns",
            stage: RouteStage::OidcTerminal,
        },
    ]
});

/// Static, immutable route table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteRegistry;

impl RouteRegistry {
    /// Resolve a route name to its descriptor.
    ///
    /// Total over [`RouteName`]: every variant has exactly one entry. A
    /// missing entry is an internal invariant violation, not a caller
    /// error, and is guarded by `test_registry_is_total`.
    pub fn resolve(&self, name: RouteName) -> &'static RouteDescriptor {
        ROUTES
            .iter()
            .find(|descriptor| descriptor.name == name)
            .unwrap_or_else(|| unreachable!("route table covers every RouteName variant"))
    }

    /// Resolve a raw identifier string, rejecting unknown values.
    pub fn resolve_id(&self, id: &str) -> Result<&'static RouteDescriptor> {
        let name = RouteName::from_str(id)?;
        Ok(self.resolve(name))
    }
}
