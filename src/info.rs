//! Authorization facts a realm reports for one identity.

use serde::{Deserialize, Serialize};

use crate::permission::Permission;
use crate::role::Role;

/// Ordered permissions and roles. Duplicates are kept and insertion order is
/// preserved.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorizationInfo {
    permissions: Vec<Permission>,
    roles: Vec<Role>,
}

impl AuthorizationInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_permission(&mut self, permission: Permission) -> &mut Self {
        self.permissions.push(permission);
        self
    }

    pub fn add_role(&mut self, role: Role) -> &mut Self {
        self.roles.push(role);
        self
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.add_permission(permission);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.add_role(role);
        self
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// True if no permission or role was added.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty() && self.roles.is_empty()
    }
}
