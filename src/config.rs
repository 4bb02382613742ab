//! Authorizer configuration.
//!
//! Describes the realms of an authorizer in TOML. Realms are registered in
//! the order they appear:
//!
//! ```toml
//! [[realms]]
//! name = "primary"
//!
//! [realms.identities.alice]
//! permissions = ["blog:post:read,write", "comments:*"]
//! roles = ["editor"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::authorizer::{Authorizer, AuthorizerBuilder};
use crate::error::{Error, Result};
use crate::info::AuthorizationInfo;
use crate::permission::Permission;
use crate::realm::{Realm, StaticRealm};
use crate::role::Role;

/// Top level configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorizerConfig {
    pub realms: Vec<RealmConfig>,
}

/// One in-memory realm.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RealmConfig {
    pub name: String,
    #[serde(default)]
    pub identities: BTreeMap<String, IdentityConfig>,
}

/// Facts held by one identifier. Notations are validated when the realm is
/// built.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    pub permissions: Vec<String>,
    pub roles: Vec<String>,
}

impl AuthorizerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Builder with one [`StaticRealm`] per configured realm. Fails on the
    /// first invalid permission notation.
    pub fn into_builder(self) -> Result<AuthorizerBuilder> {
        let mut builder = AuthorizerBuilder::new();
        for realm in self.realms {
            builder.add_realm(realm.into_realm()?);
        }
        Ok(builder)
    }

    pub fn build(self) -> Result<Authorizer> {
        self.into_builder().map(AuthorizerBuilder::build)
    }
}

impl RealmConfig {
    pub fn into_realm(self) -> Result<StaticRealm> {
        let mut realm = StaticRealm::new(self.name);
        for (identifier, identity) in self.identities {
            realm.insert(identifier, identity.into_info()?);
        }

        debug!(realm = realm.name(), identities = realm.len(), "configured realm");
        Ok(realm)
    }
}

impl IdentityConfig {
    pub fn into_info(self) -> Result<AuthorizationInfo> {
        let mut info = AuthorizationInfo::new();
        for notation in self.permissions {
            info.add_permission(Permission::new(notation)?);
        }
        for name in self.roles {
            info.add_role(Role::new(name));
        }
        Ok(info)
    }
}
