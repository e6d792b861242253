//! Error types for classification
//!
//! Resolution itself never fails. Errors come from the proxy protocol, from
//! host-facing entry points that take their flags as values, and from
//! configuration loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::kind::Kind;

/// Classification error type
#[derive(Debug, Error)]
pub enum KindError {
    /// Proxy unwrapping went deeper than the configured limit
    #[error("ProxyCycle: proxy of class `{class}` still unresolved after {depth} hops (limit {limit})")]
    ProxyCycle {
        /// Class of the value being unwrapped
        class: String,
        /// Hops taken so far
        depth: usize,
        /// Configured maximum
        limit: usize,
    },

    /// A proxy method reported failure
    #[error("ProxyError: proxy of class `{class}` failed: {message}")]
    Proxy { class: String, message: String },

    /// A downstream operation does not handle this kind
    #[error("unsupported vector kind `{kind}` in `{operation}`")]
    UnsupportedKind { kind: Kind, operation: String },

    /// Name does not denote any kind
    #[error("unknown vector kind name `{0}`")]
    UnknownKindName(String),

    /// Dispatch flag passed as a value was not a usable logical
    #[error("ArgumentError: `dispatch` must be a non-missing logical, got {0}")]
    InvalidDispatchFlag(String),

    /// Configuration values out of range
    #[error("ConfigError: {0}")]
    InvalidConfig(String),

    /// Configuration text is not valid TOML
    #[error("ConfigError: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("ConfigError: cannot read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KindError {
    /// Create a proxy cycle error
    pub fn proxy_cycle<S: Into<String>>(class: S, depth: usize, limit: usize) -> Self {
        KindError::ProxyCycle {
            class: class.into(),
            depth,
            limit,
        }
    }

    /// Create a proxy failure error
    pub fn proxy<S1: Into<String>, S2: Into<String>>(class: S1, message: S2) -> Self {
        KindError::Proxy {
            class: class.into(),
            message: message.into(),
        }
    }

    /// Create an invalid dispatch flag error
    pub fn invalid_dispatch_flag<S: Into<String>>(found: S) -> Self {
        KindError::InvalidDispatchFlag(found.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        KindError::InvalidConfig(msg.into())
    }
}

/// Error for a downstream operation reached with a kind it does not handle.
pub fn unsupported_kind<S: Into<String>>(kind: Kind, operation: S) -> KindError {
    KindError::UnsupportedKind {
        kind,
        operation: operation.into(),
    }
}

/// Result type alias for classification operations
pub type KindResult<T> = Result<T, KindError>;
