//! Host value model for vector kind classification
//!
//! This crate provides the dynamically-typed values that the
//! `vector_kind` classifier inspects:
//!
//! - `Value` enum with one variant per storage representation
//! - `Vector<T>` shared, copy-on-write element storage with a class attribute
//! - `Class` attribute and the tabular/record predicates
//! - Missing-value markers (`NA_REAL`, `Complex::NA`)

// Library code reports through `Result`; never print from here.
#![deny(clippy::print_stderr)]

pub mod class;
pub mod error;
pub mod na;
pub mod value;
pub mod vector;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use vector_kind_value::prelude::*;
/// ```
pub mod prelude {
    pub use super::class::{is_data_frame, is_record, Class, DATA_FRAME_CLASS};
    pub use super::error::{ValueError, ValueResult};
    pub use super::na::{is_na_real, Complex, NA_REAL};
    pub use super::value::{EnvironmentValue, ExternalPtr, FunctionValue, Repr, Value};
    pub use super::vector::Vector;
}

pub use prelude::*;
