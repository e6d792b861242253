//! Vector kinds
//!
//! The closed set of outcomes of classifying a value. Every value maps to
//! exactly one kind under a given dispatch mode.

mod convert;
mod predicates;


use serde::{Deserialize, Serialize};

/// Vector kind of a value
///
/// Serialized as its lowercase name (`"dataframe"`, `"s3"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// The null marker
    Null,

    // ==================== Primitive vectors ====================
    Logical,
    Integer,
    Double,
    Complex,
    Character,
    Raw,
    /// Unclassed heterogeneous list
    List,

    // ==================== Composites ====================
    /// List recognised as a tabular composite
    DataFrame,
    /// Object whose classification defers to its proxy
    S3,

    /// Anything else; never a vector
    Scalar,
}

impl Kind {
    /// All kind variants, in declaration order.
    ///
    /// When adding a variant, add it here as well; the exhaustive match in
    /// `variant_count()` will not compile otherwise, and
    /// `test_all_variants_is_exhaustive` checks the two stay in sync.
    pub fn all_variants() -> &'static [Kind] {
        &[
            Kind::Null,
            Kind::Logical,
            Kind::Integer,
            Kind::Double,
            Kind::Complex,
            Kind::Character,
            Kind::Raw,
            Kind::List,
            Kind::DataFrame,
            Kind::S3,
            Kind::Scalar,
        ]
    }

    /// Primitive kinds, the ones with a canonical empty container.
    pub fn primitives() -> &'static [Kind] {
        &Kind::all_variants()[1..=7]
    }

    #[cfg(test)]
    fn variant_count() -> usize {
        // No wildcard: a new variant without an arm here fails to compile.
        fn _exhaustive_check(k: Kind) -> u8 {
            match k {
                Kind::Null => 0,
                Kind::Logical => 0,
                Kind::Integer => 0,
                Kind::Double => 0,
                Kind::Complex => 0,
                Kind::Character => 0,
                Kind::Raw => 0,
                Kind::List => 0,
                Kind::DataFrame => 0,
                Kind::S3 => 0,
                Kind::Scalar => 0,
            }
        }
        Kind::all_variants().len()
    }
}

/// Stable lowercase name of `kind`
pub fn kind_to_name(kind: Kind) -> &'static str {
    kind.as_str()
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
