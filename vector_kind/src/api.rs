//! Host-facing entry points
//!
//! Same operations as `resolve` and `predicate`, for callers that live in
//! the host value model: the dispatch flag arrives as a logical vector and
//! the answer leaves as a host value.

use vector_kind_value::Value;

use crate::constants::shared_logical;
use crate::error::{KindError, KindResult};
use crate::predicate::is_vector_with;
use crate::proxy::Proxy;
use crate::resolve::{resolve_kind, DispatchMode};

/// Read a dispatch flag from a logical vector.
///
/// Only the first element is consulted; it must be present and non-missing.
pub fn dispatch_flag(flag: &Value) -> KindResult<DispatchMode> {
    flag.first_logical()
        .map(DispatchMode::from)
        .ok_or_else(|| KindError::invalid_dispatch_flag(flag.to_string()))
}

/// Kind name of `x` as a length-one character vector.
pub fn typeof_value(x: &Value, dispatch: &Value) -> KindResult<Value> {
    let dispatch = dispatch_flag(dispatch)?;
    Ok(Value::character([resolve_kind(x, dispatch).as_str()]))
}

/// Whether `x` is a vector, as the shared `TRUE` / `FALSE` scalar.
pub fn is_vector_value<P: Proxy + ?Sized>(
    x: &Value,
    dispatch: &Value,
    proxy: &P,
) -> KindResult<Value> {
    let dispatch = dispatch_flag(dispatch)?;
    let out = is_vector_with(x, dispatch, proxy)?;
    Ok(shared_logical(out).clone())
}
