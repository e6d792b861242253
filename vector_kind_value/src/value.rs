//! Dynamic Value type
//!
//! This module provides the `Value` enum: one variant per storage
//! representation of the host value model. Vector representations carry
//! an optional class attribute; carrying one makes the value an object.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::class::Class;
use crate::error::{ValueError, ValueResult};
use crate::na::Complex;
use crate::vector::Vector;

/// Dynamic host value
#[derive(Debug, Clone)]
pub enum Value {
    /// The null marker
    Null,

    // ========== Vector representations ==========
    /// Logical vector (`None` is missing)
    Logical(Vector<Option<bool>>),
    /// Integer vector (`None` is missing)
    Integer(Vector<Option<i32>>),
    /// Double vector (missing is `NA_REAL`)
    Double(Vector<f64>),
    /// Complex vector (missing is `Complex::NA`)
    Complex(Vector<Complex>),
    /// Character vector (`None` is missing)
    Character(Vector<Option<String>>),
    /// Byte vector
    Raw(Vector<u8>),
    /// Heterogeneous list of values
    List(Vector<Value>),

    // ========== Other representations ==========
    /// Function object
    Function(FunctionValue),
    /// Environment
    Environment(EnvironmentValue),
    /// Interned symbol
    Symbol(String),
    /// Opaque pointer owned by foreign code
    External(ExternalPtr),
}

/// Storage representation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repr {
    Null,
    Logical,
    Integer,
    Double,
    Complex,
    Character,
    Raw,
    List,
    /// Functions, environments, symbols, external pointers
    Other,
}

/// Function object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionValue {
    pub name: String,
    pub arity: usize,
    pub class: Option<Class>,
}

/// Environment handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentValue {
    pub name: String,
    pub class: Option<Class>,
}

/// Opaque foreign pointer, compared by identity
#[derive(Clone)]
pub struct ExternalPtr {
    pub tag: String,
    ptr: Arc<dyn Any + Send + Sync>,
}

impl ExternalPtr {
    pub fn new<T: Any + Send + Sync, S: Into<String>>(tag: S, payload: T) -> Self {
        ExternalPtr {
            tag: tag.into(),
            ptr: Arc::new(payload),
        }
    }

    /// Borrow the payload if it has type `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.ptr.downcast_ref::<T>()
    }
}

impl fmt::Debug for ExternalPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalPtr")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ExternalPtr {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ptr, &other.ptr)
    }
}

impl Value {
    // ========== Constructors ==========

    pub fn logical<I: IntoIterator<Item = bool>>(values: I) -> Self {
        Value::Logical(Vector::new(values.into_iter().map(Some).collect()))
    }

    pub fn integer<I: IntoIterator<Item = i32>>(values: I) -> Self {
        Value::Integer(Vector::new(values.into_iter().map(Some).collect()))
    }

    pub fn double<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Value::Double(Vector::new(values.into_iter().collect()))
    }

    pub fn complex<I: IntoIterator<Item = Complex>>(values: I) -> Self {
        Value::Complex(Vector::new(values.into_iter().collect()))
    }

    pub fn character<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Character(Vector::new(
            values.into_iter().map(|s| Some(s.into())).collect(),
        ))
    }

    pub fn raw<I: IntoIterator<Item = u8>>(values: I) -> Self {
        Value::Raw(Vector::new(values.into_iter().collect()))
    }

    pub fn list(values: Vec<Value>) -> Self {
        Value::List(Vector::new(values))
    }

    pub fn function<S: Into<String>>(name: S, arity: usize) -> Self {
        Value::Function(FunctionValue {
            name: name.into(),
            arity,
            class: None,
        })
    }

    pub fn environment<S: Into<String>>(name: S) -> Self {
        Value::Environment(EnvironmentValue {
            name: name.into(),
            class: None,
        })
    }

    pub fn symbol<S: Into<String>>(name: S) -> Self {
        Value::Symbol(name.into())
    }

    pub fn external<T: Any + Send + Sync, S: Into<String>>(tag: S, payload: T) -> Self {
        Value::External(ExternalPtr::new(tag, payload))
    }

    // ========== Representation query ==========

    /// Storage representation of this value
    pub fn repr(&self) -> Repr {
        match self {
            Value::Null => Repr::Null,
            Value::Logical(_) => Repr::Logical,
            Value::Integer(_) => Repr::Integer,
            Value::Double(_) => Repr::Double,
            Value::Complex(_) => Repr::Complex,
            Value::Character(_) => Repr::Character,
            Value::Raw(_) => Repr::Raw,
            Value::List(_) => Repr::List,
            Value::Function(_) | Value::Environment(_) | Value::Symbol(_) | Value::External(_) => {
                Repr::Other
            }
        }
    }

    /// Class attribute, if any
    pub fn class(&self) -> Option<&Class> {
        match self {
            Value::Logical(v) => v.class(),
            Value::Integer(v) => v.class(),
            Value::Double(v) => v.class(),
            Value::Complex(v) => v.class(),
            Value::Character(v) => v.class(),
            Value::Raw(v) => v.class(),
            Value::List(v) => v.class(),
            Value::Function(f) => f.class.as_ref(),
            Value::Environment(e) => e.class.as_ref(),
            Value::Null | Value::Symbol(_) | Value::External(_) => None,
        }
    }

    /// A value carrying a class attribute is an object.
    pub fn is_object(&self) -> bool {
        self.class().is_some()
    }

    /// Set or clear the class attribute.
    ///
    /// Null, symbols and external pointers cannot carry attributes.
    pub fn set_class(&mut self, class: Option<Class>) -> ValueResult<()> {
        let class = class.filter(|c| !c.is_empty());
        let type_name = self.type_name();
        match self {
            Value::Logical(v) => v.set_class(class),
            Value::Integer(v) => v.set_class(class),
            Value::Double(v) => v.set_class(class),
            Value::Complex(v) => v.set_class(class),
            Value::Character(v) => v.set_class(class),
            Value::Raw(v) => v.set_class(class),
            Value::List(v) => v.set_class(class),
            Value::Function(f) => f.class = class,
            Value::Environment(e) => e.class = class,
            Value::Null | Value::Symbol(_) | Value::External(_) => {
                return Err(ValueError::type_error(format!(
                    "cannot set a class attribute on {}",
                    type_name
                )));
            }
        }
        Ok(())
    }

    /// Builder form of `set_class`
    pub fn with_class(mut self, class: Class) -> ValueResult<Self> {
        self.set_class(Some(class))?;
        Ok(self)
    }

    /// Storage type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Logical(_) => "logical",
            Value::Integer(_) => "integer",
            Value::Double(_) => "double",
            Value::Complex(_) => "complex",
            Value::Character(_) => "character",
            Value::Raw(_) => "raw",
            Value::List(_) => "list",
            Value::Function(_) => "closure",
            Value::Environment(_) => "environment",
            Value::Symbol(_) => "symbol",
            Value::External(_) => "externalptr",
        }
    }

    /// Number of elements. Null has none, non-vectors count as one.
    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Logical(v) => v.len(),
            Value::Integer(v) => v.len(),
            Value::Double(v) => v.len(),
            Value::Complex(v) => v.len(),
            Value::Character(v) => v.len(),
            Value::Raw(v) => v.len(),
            Value::List(v) => v.len(),
            Value::Function(_) | Value::Environment(_) | Value::Symbol(_) | Value::External(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Mark vector storage as permanently shared; later writes copy.
    /// Non-vector representations are immutable already.
    pub fn mark_not_mutable(&mut self) {
        match self {
            Value::Logical(v) => v.mark_not_mutable(),
            Value::Integer(v) => v.mark_not_mutable(),
            Value::Double(v) => v.mark_not_mutable(),
            Value::Complex(v) => v.mark_not_mutable(),
            Value::Character(v) => v.mark_not_mutable(),
            Value::Raw(v) => v.mark_not_mutable(),
            Value::List(v) => v.mark_not_mutable(),
            Value::Null
            | Value::Function(_)
            | Value::Environment(_)
            | Value::Symbol(_)
            | Value::External(_) => {}
        }
    }

    /// Whether writes through this handle may happen in place
    pub fn is_mutable(&self) -> bool {
        match self {
            Value::Logical(v) => v.is_mutable(),
            Value::Integer(v) => v.is_mutable(),
            Value::Double(v) => v.is_mutable(),
            Value::Complex(v) => v.is_mutable(),
            Value::Character(v) => v.is_mutable(),
            Value::Raw(v) => v.is_mutable(),
            Value::List(v) => v.is_mutable(),
            Value::Null
            | Value::Function(_)
            | Value::Environment(_)
            | Value::Symbol(_)
            | Value::External(_) => false,
        }
    }

    // ========== Accessors ==========

    pub fn as_logical(&self) -> Option<&Vector<Option<bool>>> {
        match self {
            Value::Logical(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&Vector<Option<i32>>> {
        match self {
            Value::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<&Vector<f64>> {
        match self {
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&Vector<Complex>> {
        match self {
            Value::Complex(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_character(&self) -> Option<&Vector<Option<String>>> {
        match self {
            Value::Character(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vector<Value>> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// First element of a logical vector. `None` when the value is not a
    /// logical vector, is empty, or its first element is missing.
    pub fn first_logical(&self) -> Option<bool> {
        self.as_logical().and_then(|v| v.get(0).copied().flatten())
    }
}

// ========== From implementations ==========

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::logical([v])
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::integer([v])
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::double([v])
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::character([v])
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

// ========== Display implementation ==========

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Function(func) => write!(f, "<function {}/{}>", func.name, func.arity),
            Value::Environment(env) => write!(f, "<environment {}>", env.name),
            Value::Symbol(name) => write!(f, "`{}`", name),
            Value::External(ptr) => write!(f, "<pointer {}>", ptr.tag),
            _ => {
                write!(f, "<{}[{}]", self.type_name(), self.len())?;
                if let Some(class) = self.class() {
                    write!(f, " {}", class)?;
                }
                write!(f, ">")
            }
        }
    }
}

// ========== PartialEq implementation ==========

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Logical(a), Value::Logical(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Complex(a), Value::Complex(b)) => a == b,
            (Value::Character(a), Value::Character(b)) => a == b,
            (Value::Raw(a), Value::Raw(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Environment(a), Value::Environment(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::External(a), Value::External(b)) => a == b,
            _ => false,
        }
    }
}
