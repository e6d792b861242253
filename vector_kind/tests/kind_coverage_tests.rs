//! Exhaustive Kind coverage tests
//!
//! Every `Kind` variant must be produced by resolving at least one value.
//! When adding a variant, add it to `Kind::all_variants()` and give it an
//! entry in `coverage_examples()` below; `test_every_kind_is_accounted_for`
//! fails otherwise.

use std::collections::HashSet;

use vector_kind::prelude::*;
use vector_kind::value::Complex;

/// Coverage entry: (value, dispatch, expected kind, description)
type CoverageEntry = (Value, DispatchMode, Kind, &'static str);

fn classed(x: Value, class: &str) -> Value {
    x.with_class(Class::single(class)).unwrap()
}

/// One value per kind, documenting what produces it
fn coverage_examples() -> Vec<CoverageEntry> {
    vec![
        (Value::Null, DispatchMode::Dispatch, Kind::Null, "null marker"),
        (Value::logical([true]), DispatchMode::Dispatch, Kind::Logical, "logical vector"),
        (Value::integer([1]), DispatchMode::Dispatch, Kind::Integer, "integer vector"),
        (Value::double([1.0]), DispatchMode::Dispatch, Kind::Double, "double vector"),
        (
            Value::complex([Complex::new(0.0, 1.0)]),
            DispatchMode::Dispatch,
            Kind::Complex,
            "complex vector",
        ),
        (
            Value::character(["a"]),
            DispatchMode::Dispatch,
            Kind::Character,
            "character vector",
        ),
        (Value::raw([1]), DispatchMode::Dispatch, Kind::Raw, "raw vector"),
        (Value::list(vec![]), DispatchMode::Dispatch, Kind::List, "unclassed list"),
        (
            classed(Value::list(vec![]), "data.frame"),
            DispatchMode::Dispatch,
            Kind::DataFrame,
            "data frame",
        ),
        (
            classed(Value::integer([1]), "factor"),
            DispatchMode::Dispatch,
            Kind::S3,
            "classed integer",
        ),
        (
            classed(Value::list(vec![]), "lm"),
            DispatchMode::Bare,
            Kind::Scalar,
            "classed list without dispatch",
        ),
        (Value::function("f", 0), DispatchMode::Dispatch, Kind::Scalar, "function"),
    ]
}

#[test]
fn test_coverage_examples_resolve_as_documented() {
    for (value, dispatch, expected, description) in coverage_examples() {
        assert_eq!(
            resolve_kind(&value, dispatch),
            expected,
            "{} ({}) resolved to the wrong kind",
            description,
            value
        );
    }
}

#[test]
fn test_every_kind_is_accounted_for() {
    let covered: HashSet<Kind> = coverage_examples().iter().map(|entry| entry.2).collect();
    let missing: Vec<&str> = Kind::all_variants()
        .iter()
        .filter(|kind| !covered.contains(*kind))
        .map(Kind::as_str)
        .collect();
    assert!(
        missing.is_empty(),
        "kinds without a coverage example: {:?}",
        missing
    );
}

#[test]
fn test_kind_name_table() {
    let names: Vec<&str> = Kind::all_variants().iter().map(|k| kind_to_name(*k)).collect();
    insta::assert_snapshot!(
        names.join(" "),
        @"null logical integer double complex character raw list dataframe s3 scalar"
    );
}

#[test]
fn test_kind_serializes_as_name() {
    for &kind in Kind::all_variants() {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
        let back: Kind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}
