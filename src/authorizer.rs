//! Authorization queries over an ordered list of realms.
//!
//! Setup and querying are separate phases. Realms are registered on an
//! [`AuthorizerBuilder`], and [`AuthorizerBuilder::build`] freezes them into an
//! [`Authorizer`] that only answers queries and can be shared between threads.
//!
//! Realms are consulted in registration order and the first one that returns
//! [`Lookup::Info`] decides. Facts are never merged across realms: once a realm
//! answers, even with an empty [`AuthorizationInfo`], later realms are not
//! asked. If no realm answers, the identity holds nothing.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::identity::Identity;
use crate::info::AuthorizationInfo;
use crate::matcher::any_match;
use crate::permission::Permission;
use crate::realm::{Lookup, Realm};
use crate::role::Role;

/// Configuration phase of an [`Authorizer`].
#[derive(Default, Clone)]
pub struct AuthorizerBuilder {
    realms: Vec<Arc<dyn Realm>>,
}

impl AuthorizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `realm`. Registration order is lookup order.
    pub fn add_realm<R>(&mut self, realm: R) -> &mut Self
    where
        R: Realm + 'static,
    {
        self.realms.push(Arc::new(realm));
        self
    }

    /// Append a realm that is also held elsewhere.
    pub fn add_shared_realm(&mut self, realm: Arc<dyn Realm>) -> &mut Self {
        self.realms.push(realm);
        self
    }

    pub fn with_realm<R>(mut self, realm: R) -> Self
    where
        R: Realm + 'static,
    {
        self.add_realm(realm);
        self
    }

    pub fn build(self) -> Authorizer {
        Authorizer {
            realms: self.realms,
        }
    }
}

/// Answers permission and role queries for identities.
///
/// # Example
///
/// ```
/// use authorization_realms::{AuthorizationInfo, Authorizer, Permission, Role, StaticRealm};
///
/// let info = AuthorizationInfo::new()
///     .with_permission(Permission::new("blog:post:*").unwrap())
///     .with_role(Role::new("editor"));
///
/// let authorizer = Authorizer::builder()
///     .with_realm(StaticRealm::new("local").with_identity("alice", info))
///     .build();
///
/// assert!(authorizer.permits("alice", "blog:post:write").unwrap());
/// assert!(!authorizer.permits("alice", "blog:comment:write").unwrap());
/// assert!(authorizer.has_role_named("alice", "editor"));
/// assert!(!authorizer.has_role_named("bob", "editor"));
/// ```
#[derive(Default, Clone)]
pub struct Authorizer {
    realms: Vec<Arc<dyn Realm>>,
}

impl Authorizer {
    pub fn builder() -> AuthorizerBuilder {
        AuthorizerBuilder::new()
    }

    pub fn realm_count(&self) -> usize {
        self.realms.len()
    }

    /// Facts for `identity` from the first realm that has any. Empty if no
    /// realm does.
    pub fn authorization_info<I>(&self, identity: &I) -> AuthorizationInfo
    where
        I: Identity + ?Sized,
    {
        let identity: &dyn Identity = &identity;
        for realm in &self.realms {
            trace!(
                identity = identity.identifier(),
                realm = realm.name(),
                "consulting realm"
            );
            if let Lookup::Info(info) = realm.authorization_info(identity) {
                trace!(
                    identity = identity.identifier(),
                    realm = realm.name(),
                    "realm answered"
                );
                return info;
            }
        }

        trace!(identity = identity.identifier(), "no realm answered");
        AuthorizationInfo::new()
    }

    /// True if any permission held by `identity` implies `permission`.
    pub fn is_permitted<I>(&self, identity: &I, permission: &Permission) -> bool
    where
        I: Identity + ?Sized,
    {
        let info = self.authorization_info(identity);
        let permitted = any_match(info.permissions(), permission);

        debug!(
            identity = identity.identifier(),
            %permission,
            permitted,
            "permission check"
        );
        permitted
    }

    /// True if `identity` holds `role`.
    pub fn has_role<I>(&self, identity: &I, role: &Role) -> bool
    where
        I: Identity + ?Sized,
    {
        let info = self.authorization_info(identity);
        let assigned = any_match(info.roles(), role);

        debug!(
            identity = identity.identifier(),
            %role,
            assigned,
            "role check"
        );
        assigned
    }

    /// [`Authorizer::is_permitted`] for a permission notation. Fails only if
    /// the notation is invalid.
    pub fn permits<I>(&self, identity: &I, notation: &str) -> Result<bool>
    where
        I: Identity + ?Sized,
    {
        let permission = Permission::new(notation)?;
        Ok(self.is_permitted(identity, &permission))
    }

    /// [`Authorizer::has_role`] for a role name.
    pub fn has_role_named<I>(&self, identity: &I, name: &str) -> bool
    where
        I: Identity + ?Sized,
    {
        self.has_role(identity, &Role::new(name))
    }

    /// Like [`Authorizer::is_permitted`] but a denial is an
    /// [`Error::NotPermitted`].
    pub fn check_permission<I>(&self, identity: &I, permission: &Permission) -> Result<&Self>
    where
        I: Identity + ?Sized,
    {
        if self.is_permitted(identity, permission) {
            return Ok(self);
        }

        debug!(
            identity = identity.identifier(),
            %permission,
            "identity not permitted"
        );
        Err(Error::NotPermitted {
            identity: identity.identifier().to_string(),
            permission: permission.to_string(),
        })
    }

    /// Like [`Authorizer::has_role`] but a denial is an
    /// [`Error::RoleNotAssigned`].
    pub fn check_role<I>(&self, identity: &I, role: &Role) -> Result<&Self>
    where
        I: Identity + ?Sized,
    {
        if self.has_role(identity, role) {
            return Ok(self);
        }

        debug!(
            identity = identity.identifier(),
            %role,
            "identity not assigned to role"
        );
        Err(Error::RoleNotAssigned {
            identity: identity.identifier().to_string(),
            role: role.to_string(),
        })
    }
}

impl From<AuthorizerBuilder> for Authorizer {
    fn from(builder: AuthorizerBuilder) -> Self {
        builder.build()
    }
}

impl fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorizer")
            .field(
                "realms",
                &self.realms.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
