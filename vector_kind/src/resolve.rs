//! Type resolution
//!
//! Maps a value to its `Kind`. Resolution is pure, total and allocation-free:
//! it only reads the representation tag and the class attribute.

use vector_kind_value::{is_data_frame, Repr, Value};

use crate::kind::Kind;

/// Whether a class attribute is honored during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DispatchMode {
    /// Classed values resolve to `s3`
    #[default]
    Dispatch,
    /// Classify by representation only
    Bare,
}

impl DispatchMode {
    pub fn is_enabled(self) -> bool {
        matches!(self, DispatchMode::Dispatch)
    }
}

impl From<bool> for DispatchMode {
    fn from(dispatch: bool) -> Self {
        if dispatch {
            DispatchMode::Dispatch
        } else {
            DispatchMode::Bare
        }
    }
}

/// Resolve the kind of `x`.
///
/// A classed primitive vector is `s3` under `Dispatch` and its primitive kind
/// under `Bare`. A classed list is `dataframe` when tabular; otherwise `s3`
/// under `Dispatch` and `scalar` under `Bare`, not `list`.
pub fn resolve_kind(x: &Value, dispatch: DispatchMode) -> Kind {
    let object = x.is_object() && dispatch.is_enabled();
    let primitive = |kind| if object { Kind::S3 } else { kind };

    match x.repr() {
        Repr::Null => Kind::Null,
        Repr::Logical => primitive(Kind::Logical),
        Repr::Integer => primitive(Kind::Integer),
        Repr::Double => primitive(Kind::Double),
        Repr::Complex => primitive(Kind::Complex),
        Repr::Character => primitive(Kind::Character),
        Repr::Raw => primitive(Kind::Raw),
        Repr::List => {
            if !x.is_object() {
                Kind::List
            } else if is_data_frame(x) {
                Kind::DataFrame
            } else if dispatch.is_enabled() {
                Kind::S3
            } else {
                Kind::Scalar
            }
        }
        Repr::Other => Kind::Scalar,
    }
}

/// Resolve the kind of `x` with dispatch enabled.
#[inline]
pub fn vec_typeof(x: &Value) -> Kind {
    resolve_kind(x, DispatchMode::Dispatch)
}

/// Name of the kind of `x` under `dispatch`.
pub fn typeof_name(x: &Value, dispatch: DispatchMode) -> &'static str {
    resolve_kind(x, dispatch).as_str()
}
