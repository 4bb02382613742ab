//! Access policies evaluated against an authorizer.
//!
//! A [`Requirement`] is a small expression over permissions and roles,
//! composed with [`Requirement::AllOf`] and [`Requirement::AnyOf`].

use crate::authorizer::Authorizer;
use crate::identity::Identity;
use crate::permission::Permission;
use crate::role::Role;

/// Decides whether an identity is allowed.
pub trait Policy {
    fn is_allowed(&self, authorizer: &Authorizer, identity: &dyn Identity) -> bool;
}

/// Requirement on the facts an identity holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Some held permission implies this one.
    Permission(Permission),

    /// The role is held.
    Role(Role),

    /// Every nested requirement holds. Holds when empty.
    AllOf(Vec<Self>),

    /// At least one nested requirement holds. Never holds when empty.
    AnyOf(Vec<Self>),
}

impl Policy for Requirement {
    fn is_allowed(&self, authorizer: &Authorizer, identity: &dyn Identity) -> bool {
        match self {
            Requirement::Permission(permission) => authorizer.is_permitted(identity, permission),
            Requirement::Role(role) => authorizer.has_role(identity, role),
            Requirement::AllOf(rs) => rs.iter().all(|r| r.is_allowed(authorizer, identity)),
            Requirement::AnyOf(rs) => rs.iter().any(|r| r.is_allowed(authorizer, identity)),
        }
    }
}

impl From<Permission> for Requirement {
    fn from(permission: Permission) -> Self {
        Requirement::Permission(permission)
    }
}

impl From<Role> for Requirement {
    fn from(role: Role) -> Self {
        Requirement::Role(role)
    }
}
