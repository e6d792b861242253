//! Vector kind classification
//!
//! Classifies values of the `vector_kind_value` model into a closed set of
//! vector kinds and decides whether a value behaves as a vector:
//!
//! - `Kind` taxonomy and its names
//! - `resolve_kind` type resolution under a `DispatchMode`
//! - `is_vector` predicate, unwrapping objects through a `Proxy`
//! - Shared constant pool of canonical empty vectors and logical scalars
//!
//! # Example
//!
//! ```
//! use vector_kind::prelude::*;
//!
//! let x = Value::logical([]);
//! assert_eq!(vec_typeof(&x), Kind::Logical);
//! assert!(is_vector(&x, &IdentityProxy).unwrap());
//! ```

// Prevent accidental debug output in library code; traces go through
// `debug::debug_log`.
#![deny(clippy::print_stderr)]

pub mod api;
pub mod config;
pub mod constants;
pub mod debug;
pub mod error;
pub mod kind;
pub mod predicate;
pub mod proxy;
pub mod resolve;

// Re-export the host value model
pub use vector_kind_value as value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use vector_kind::prelude::*;
/// ```
pub mod prelude {
    pub use super::config::ClassifyConfig;
    pub use super::constants::{init_constants, shared_empty, shared_logical, ConstantPool};
    pub use super::error::{unsupported_kind, KindError, KindResult};
    pub use super::kind::{kind_to_name, Kind};
    pub use super::predicate::{is_vector, is_vector_with, Classifier};
    pub use super::proxy::{IdentityProxy, Proxy, ProxyRegistry};
    pub use super::resolve::{resolve_kind, typeof_name, vec_typeof, DispatchMode};
    pub use vector_kind_value::{Class, Value};
}

pub use prelude::*;
