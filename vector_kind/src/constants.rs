//! Shared constants
//!
//! Canonical immutable values handed out instead of allocating: one empty
//! vector per primitive kind, the logical scalars `TRUE` / `FALSE`, and the
//! missing complex.
//!
//! The process-wide pool is built once, on first access or by an explicit
//! `init_constants()` at startup, and is read-only afterwards. Every pooled
//! vector is marked not-mutable, so a consumer that writes to its clone
//! writes into a private copy.

use once_cell::sync::Lazy;
use vector_kind_value::{Complex, Value, Vector};

use crate::kind::Kind;

/// Table of canonical values
#[derive(Debug)]
pub struct ConstantPool {
    empty_lgl: Value,
    empty_int: Value,
    empty_dbl: Value,
    empty_cpl: Value,
    empty_chr: Value,
    empty_raw: Value,
    empty_list: Value,
    true_lgl: Value,
    false_lgl: Value,
    na_cpl: Complex,
}

impl ConstantPool {
    /// Build a fresh pool. Most callers want the process-wide `shared()` one.
    pub fn new() -> Self {
        ConstantPool {
            empty_lgl: frozen(Value::Logical(Vector::empty())),
            empty_int: frozen(Value::Integer(Vector::empty())),
            empty_dbl: frozen(Value::Double(Vector::empty())),
            empty_cpl: frozen(Value::Complex(Vector::empty())),
            empty_chr: frozen(Value::Character(Vector::empty())),
            empty_raw: frozen(Value::Raw(Vector::empty())),
            empty_list: frozen(Value::List(Vector::empty())),
            true_lgl: frozen(Value::logical([true])),
            false_lgl: frozen(Value::logical([false])),
            na_cpl: Complex::NA,
        }
    }

    /// Empty vector of a primitive kind; `None` for other kinds.
    pub fn empty(&self, kind: Kind) -> Option<&Value> {
        match kind {
            Kind::Logical => Some(&self.empty_lgl),
            Kind::Integer => Some(&self.empty_int),
            Kind::Double => Some(&self.empty_dbl),
            Kind::Complex => Some(&self.empty_cpl),
            Kind::Character => Some(&self.empty_chr),
            Kind::Raw => Some(&self.empty_raw),
            Kind::List => Some(&self.empty_list),
            Kind::Null | Kind::DataFrame | Kind::S3 | Kind::Scalar => None,
        }
    }

    /// Length-one logical holding `value`
    pub fn logical(&self, value: bool) -> &Value {
        if value {
            &self.true_lgl
        } else {
            &self.false_lgl
        }
    }

    pub fn true_value(&self) -> &Value {
        &self.true_lgl
    }

    pub fn false_value(&self) -> &Value {
        &self.false_lgl
    }

    pub fn na_complex(&self) -> Complex {
        self.na_cpl
    }
}

impl Default for ConstantPool {
    fn default() -> Self {
        Self::new()
    }
}

fn frozen(mut value: Value) -> Value {
    value.mark_not_mutable();
    value
}

static SHARED: Lazy<ConstantPool> = Lazy::new(ConstantPool::new);

/// Build the process-wide pool now rather than on first use.
///
/// Safe to call more than once; only the first call allocates.
pub fn init_constants() -> &'static ConstantPool {
    Lazy::force(&SHARED)
}

/// The process-wide pool
pub fn shared() -> &'static ConstantPool {
    &SHARED
}

/// Shared empty vector of a primitive kind
pub fn shared_empty(kind: Kind) -> Option<&'static Value> {
    shared().empty(kind)
}

/// Shared length-one logical holding `value`
pub fn shared_logical(value: bool) -> &'static Value {
    shared().logical(value)
}

pub fn shared_true() -> &'static Value {
    shared().true_value()
}

pub fn shared_false() -> &'static Value {
    shared().false_value()
}

pub fn shared_na_complex() -> Complex {
    shared().na_complex()
}
