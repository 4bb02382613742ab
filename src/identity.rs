//! Identities whose authorization is queried.

use std::fmt;

/// Something with a stable identifier. Realms look authorization facts up by
/// this identifier.
pub trait Identity {
    fn identifier(&self) -> &str;
}

/// Plain identity carrying only its identifier.
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    pub fn new<S>(identifier: S) -> Self
    where
        S: Into<String>,
    {
        Identifier(identifier.into())
    }
}

impl Identity for Identifier {
    fn identifier(&self) -> &str {
        &self.0
    }
}

impl Identity for str {
    fn identifier(&self) -> &str {
        self
    }
}

impl Identity for String {
    fn identifier(&self) -> &str {
        self
    }
}

impl<T> Identity for &T
where
    T: Identity + ?Sized,
{
    fn identifier(&self) -> &str {
        (**self).identifier()
    }
}

impl From<&str> for Identifier {
    fn from(identifier: &str) -> Self {
        Identifier::new(identifier)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
