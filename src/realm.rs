//! Sources of authorization facts.
//!
//! A realm maps an identity to the permissions and roles it holds. Lookups
//! are read only. A realm that knows nothing about an identity answers
//! [`Lookup::NoInfo`] instead of failing, and any internal failure (an
//! unreachable store, say) must be resolved by the realm to one of the two
//! outcomes before it returns.

use std::collections::HashMap;

use crate::identity::Identity;
use crate::info::AuthorizationInfo;

/// Outcome of a realm lookup.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Lookup {
    /// The realm has an opinion about the identity, even if it is empty.
    Info(AuthorizationInfo),
    /// The realm has no information about the identity.
    NoInfo,
}

impl Lookup {
    pub fn is_info(&self) -> bool {
        matches!(self, Lookup::Info(_))
    }

    pub fn into_info(self) -> Option<AuthorizationInfo> {
        match self {
            Lookup::Info(info) => Some(info),
            Lookup::NoInfo => None,
        }
    }
}

impl From<Option<AuthorizationInfo>> for Lookup {
    fn from(info: Option<AuthorizationInfo>) -> Self {
        match info {
            Some(info) => Lookup::Info(info),
            None => Lookup::NoInfo,
        }
    }
}

impl From<AuthorizationInfo> for Lookup {
    fn from(info: AuthorizationInfo) -> Self {
        Lookup::Info(info)
    }
}

/// Source of authorization facts.
pub trait Realm: Send + Sync {
    /// Look up the authorization facts for `identity`.
    fn authorization_info(&self, identity: &dyn Identity) -> Lookup;

    /// Name used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Realm for F
where
    F: Fn(&dyn Identity) -> Lookup + Send + Sync,
{
    fn authorization_info(&self, identity: &dyn Identity) -> Lookup {
        self(identity)
    }
}

/// In-memory realm keyed by identifier. Identities without an entry get
/// [`Lookup::NoInfo`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StaticRealm {
    name: String,
    identities: HashMap<String, AuthorizationInfo>,
}

impl StaticRealm {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        StaticRealm {
            name: name.into(),
            identities: HashMap::new(),
        }
    }

    /// Set the facts for `identifier`, replacing any previous entry.
    pub fn insert<S>(&mut self, identifier: S, info: AuthorizationInfo) -> &mut Self
    where
        S: Into<String>,
    {
        self.identities.insert(identifier.into(), info);
        self
    }

    pub fn with_identity<S>(mut self, identifier: S, info: AuthorizationInfo) -> Self
    where
        S: Into<String>,
    {
        self.insert(identifier, info);
        self
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

impl Realm for StaticRealm {
    fn authorization_info(&self, identity: &dyn Identity) -> Lookup {
        self.identities.get(identity.identifier()).cloned().into()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
