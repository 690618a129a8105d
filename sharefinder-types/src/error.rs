use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the sharefinder workspace.
///
/// Connectors report failures with these variants; the orchestrator downgrades
/// every one of them to "no data" except [`SharefinderError::CredentialMissing`],
/// which is raised before any provider is contacted.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SharefinderError {
    /// The request never produced a response (DNS, TLS, connection reset, body read).
    #[error("{connector} transport error: {msg}")]
    Transport {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The provider answered with a non-2xx status.
    #[error("{connector} returned HTTP {status}")]
    Status {
        /// Connector name that failed.
        connector: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not have the expected JSON structure.
    #[error("{connector} returned an unexpected shape: {msg}")]
    Shape {
        /// Connector name that failed.
        connector: String,
        /// Description of what was expected.
        msg: String,
    },

    /// A numeric field could not be coerced.
    #[error("cannot coerce {field}={value:?} to a number")]
    Coercion {
        /// Field name as it appears in the provider payload.
        field: String,
        /// Raw value that failed to parse.
        value: String,
    },

    /// A required credential is absent from the credential store.
    #[error("missing credential: {name}")]
    CredentialMissing {
        /// Environment/secret name that was not set.
        name: String,
    },

    /// The provider has no record for the requested symbol.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "profile for SPY".
        what: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label, e.g. "profile" or "estimate".
        capability: String,
    },
}

impl SharefinderError {
    /// Helper: build a `Transport` error.
    pub fn transport(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Status` error.
    pub fn status(connector: impl Into<String>, status: u16) -> Self {
        Self::Status {
            connector: connector.into(),
            status,
        }
    }

    /// Helper: build a `Shape` error.
    pub fn shape(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Shape {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Coercion` error.
    pub fn coercion(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Coercion {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Helper: build a `CredentialMissing` error.
    pub fn credential_missing(name: impl Into<String>) -> Self {
        Self::CredentialMissing { name: name.into() }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Returns true if this error should be surfaced to operators as actionable.
    ///
    /// A provider simply not knowing a symbol, or not offering a capability, is
    /// expected during fallback and is not actionable.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::NotFound { .. } | Self::Unsupported { .. })
    }

    /// Returns true for the only error class allowed to abort a lookup.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::CredentialMissing { .. })
    }
}
