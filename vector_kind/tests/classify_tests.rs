//! Classification properties
//!
//! Resolution and the vector predicate over every representation, with and
//! without dispatch, including objects unwrapped through stub proxies.

use std::cell::Cell;

use pretty_assertions::assert_eq;
use vector_kind::prelude::*;
use vector_kind::value::Complex;

/// One unclassed value per primitive representation, with its kind
fn primitive_values() -> Vec<(Value, Kind)> {
    vec![
        (Value::logical([true, false]), Kind::Logical),
        (Value::integer([1, 2, 3]), Kind::Integer),
        (Value::double([0.5]), Kind::Double),
        (Value::complex([Complex::new(1.0, -1.0)]), Kind::Complex),
        (Value::character(["x", "y"]), Kind::Character),
        (Value::raw([0, 255]), Kind::Raw),
    ]
}

fn classed(x: Value, class: &str) -> Value {
    x.with_class(Class::single(class)).unwrap()
}

/// Proxy stub counting its calls
struct CountingProxy<F> {
    calls: Cell<usize>,
    result: F,
}

impl<F: Fn() -> Value> CountingProxy<F> {
    fn new(result: F) -> Self {
        CountingProxy {
            calls: Cell::new(0),
            result,
        }
    }
}

impl<F: Fn() -> Value> Proxy for CountingProxy<F> {
    fn proxy(&self, _x: &Value) -> KindResult<Value> {
        self.calls.set(self.calls.get() + 1);
        Ok((self.result)())
    }
}

#[test]
fn unclassed_primitives_resolve_the_same_in_both_modes() {
    for (value, kind) in primitive_values() {
        assert_eq!(resolve_kind(&value, DispatchMode::Dispatch), kind);
        assert_eq!(resolve_kind(&value, DispatchMode::Bare), kind);
    }
}

#[test]
fn classed_primitives_are_s3_only_with_dispatch() {
    for (value, kind) in primitive_values() {
        let value = classed(value, "vctrs_vctr");
        assert_eq!(resolve_kind(&value, DispatchMode::Dispatch), Kind::S3);
        assert_eq!(resolve_kind(&value, DispatchMode::Bare), kind);
    }
}

#[test]
fn list_resolution_by_class() {
    let plain = Value::list(vec![Value::integer([1]), Value::character(["a"])]);
    assert_eq!(vec_typeof(&plain), Kind::List);

    let df = classed(plain.clone(), "data.frame");
    assert_eq!(vec_typeof(&df), Kind::DataFrame);

    let other = classed(plain, "lm");
    assert_eq!(resolve_kind(&other, DispatchMode::Dispatch), Kind::S3);
    assert_eq!(resolve_kind(&other, DispatchMode::Bare), Kind::Scalar);
}

#[test]
fn vector_kinds_never_consult_the_proxy() {
    let proxy = CountingProxy::new(|| Value::Null);
    let mut values: Vec<Value> = primitive_values().into_iter().map(|(v, _)| v).collect();
    values.push(Value::list(vec![]));
    values.push(classed(Value::list(vec![]), "data.frame"));

    for value in &values {
        assert!(
            is_vector(value, &proxy).unwrap(),
            "{} should be a vector",
            value
        );
    }
    assert_eq!(proxy.calls.get(), 0);
}

#[test]
fn null_and_scalars_never_consult_the_proxy() {
    let proxy = CountingProxy::new(|| Value::integer([1]));
    let values = [
        Value::Null,
        Value::function("f", 0),
        Value::environment("global"),
        Value::symbol("x"),
        Value::external("handle", 0u64),
    ];
    for value in &values {
        assert!(!is_vector(value, &proxy).unwrap(), "{} is not a vector", value);
    }
    assert_eq!(proxy.calls.get(), 0);
}

#[test]
fn s3_is_decided_by_its_proxy() {
    let x = classed(Value::list(vec![]), "my_type");

    let to_integer = CountingProxy::new(|| Value::integer([1, 2]));
    assert!(is_vector(&x, &to_integer).unwrap());
    assert_eq!(to_integer.calls.get(), 1);
    assert_eq!(
        is_vector(&x, &to_integer).unwrap(),
        is_vector_with(&Value::integer([1, 2]), DispatchMode::Bare, &to_integer).unwrap()
    );

    let to_function = CountingProxy::new(|| Value::function("g", 0));
    assert!(!is_vector(&x, &to_function).unwrap());
    assert_eq!(to_function.calls.get(), 1);
}

#[test]
fn proxy_result_is_classified_without_dispatch() {
    let x = classed(Value::integer([1]), "outer");

    // A classed non-tabular list proxy is a scalar once dispatch is off.
    let to_classed_list = CountingProxy::new(|| classed(Value::list(vec![]), "inner"));
    assert!(!is_vector(&x, &to_classed_list).unwrap());

    let to_classed_double = CountingProxy::new(|| classed(Value::double([1.0]), "inner"));
    assert!(is_vector(&x, &to_classed_double).unwrap());
    assert_eq!(to_classed_double.calls.get(), 1);
}

#[test]
fn registry_unwraps_by_class() {
    let registry = ProxyRegistry::new()
        .with("vctrs_rcrd", |x: &Value| {
            let fields = x.as_list().map(|l| l.as_slice().to_vec()).unwrap_or_default();
            Value::list(fields)
                .with_class(Class::single("data.frame"))
                .map_err(|e| KindError::proxy("vctrs_rcrd", e.to_string()))
        })
        .with("opaque", |_: &Value| Ok(Value::external("blob", ())));

    let rcrd = Value::list(vec![Value::integer([1]), Value::double([2.0])])
        .with_class(Class::new(["vctrs_percent", "vctrs_rcrd", "vctrs_vctr"]))
        .unwrap();
    let opaque = classed(Value::raw([1, 2]), "opaque");
    let factor = classed(Value::integer([1]), "factor");

    let classifier = Classifier::new(registry);
    assert!(classifier.is_vector(&rcrd).unwrap());
    assert!(!classifier.is_vector(&opaque).unwrap());
    assert!(classifier.is_vector(&factor).unwrap());
}

#[test]
fn explicit_dispatch_entry_point() {
    let model = classed(Value::list(vec![]), "lm");
    let to_double = CountingProxy::new(|| Value::double([1.0]));

    assert!(is_vector_with(&model, DispatchMode::Dispatch, &to_double).unwrap());
    assert!(!is_vector_with(&model, DispatchMode::Bare, &to_double).unwrap());
    assert_eq!(to_double.calls.get(), 1);
}

#[test]
fn proxy_errors_propagate() {
    let failing = |_: &Value| -> KindResult<Value> { Err(KindError::proxy("my_type", "boom")) };
    let x = classed(Value::list(vec![]), "my_type");
    let err = is_vector(&x, &failing).unwrap_err();
    assert_eq!(
        err.to_string(),
        "ProxyError: proxy of class `my_type` failed: boom"
    );
}

#[test]
fn proxy_depth_ceiling_reports_cycle() {
    let x = classed(Value::double([1.0]), "Date");
    let classifier = Classifier::new(IdentityProxy)
        .with_config(ClassifyConfig::default().with_max_proxy_depth(0))
        .unwrap();
    assert!(matches!(
        classifier.is_vector(&x),
        Err(KindError::ProxyCycle { depth: 0, limit: 0, .. })
    ));

    // Unclassed values need no hop and are unaffected by the ceiling.
    assert!(classifier.is_vector(&Value::double([1.0])).unwrap());
}

#[test]
fn scenario_empty_logical() {
    let x = Value::logical([]);
    let kind = resolve_kind(&x, DispatchMode::Dispatch);
    assert_eq!(kind, Kind::Logical);
    assert_eq!(kind_to_name(kind), "logical");
    assert!(is_vector(&x, &IdentityProxy).unwrap());
}

#[test]
fn scenario_data_frame() {
    let x = classed(Value::list(vec![Value::integer([1, 2])]), "data.frame");
    assert_eq!(vec_typeof(&x), Kind::DataFrame);
    assert!(is_vector(&x, &IdentityProxy).unwrap());
}

#[test]
fn scenario_null() {
    let kind = vec_typeof(&Value::Null);
    assert_eq!(kind, Kind::Null);
    assert_eq!(kind_to_name(kind), "null");
    assert!(!is_vector(&Value::Null, &IdentityProxy).unwrap());
}

#[test]
fn unsupported_kind_error_names_the_operation() {
    let x = Value::function("f", 0);
    let err = unsupported_kind(vec_typeof(&x), "vec_ptype2");
    assert_eq!(
        err.to_string(),
        "unsupported vector kind `scalar` in `vec_ptype2`"
    );
}
