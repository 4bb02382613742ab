//! Named roles.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matcher::Matcher;

/// Immutable role. Names are opaque and compared byte for byte, so `admin`
/// and `Admin` are different roles.
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Role(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Exact name equality.
    pub fn is_equal(&self, other: &Role) -> bool {
        self.0 == other.0
    }

    /// Like [`Role::is_equal`] for a value of unknown type. Anything that is
    /// not a `Role` is never equal.
    pub fn is_equal_value(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Role>()
            .map_or(false, |other| self.is_equal(other))
    }
}

impl Matcher for Role {
    type Target = Role;

    fn test(&self, target: &Self::Target) -> bool {
        self.is_equal(target)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::new(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Role(name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
