//! Errors produced while building values, loading configuration, or enforcing
//! authorization decisions.

use thiserror::Error;

/// Crate error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A permission notation does not match the grammar.
    #[error("invalid permission notation '{notation}'")]
    InvalidNotation {
        /// The rejected notation.
        notation: String,
    },

    /// The identity is not permitted by the requested permission.
    #[error("identity '{identity}' is not permitted by permission '{permission}'")]
    NotPermitted {
        /// Identifier of the identity that was checked.
        identity: String,
        /// Notation of the requested permission.
        permission: String,
    },

    /// The identity is not assigned the requested role.
    #[error("identity '{identity}' is not assigned to role '{role}'")]
    RoleNotAssigned {
        /// Identifier of the identity that was checked.
        identity: String,
        /// Name of the requested role.
        role: String,
    },

    /// Configuration could not be parsed.
    #[error("invalid authorization config: {0}")]
    Config(String),

    /// Configuration could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_notation(notation: impl Into<String>) -> Self {
        Error::InvalidNotation {
            notation: notation.into(),
        }
    }

    /// True for the errors raised by enforcement rather than by bad input.
    #[must_use]
    pub fn is_denial(&self) -> bool {
        matches!(self, Error::NotPermitted { .. } | Error::RoleNotAssigned { .. })
    }
}

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;
