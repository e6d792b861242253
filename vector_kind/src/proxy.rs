//! Proxy protocol
//!
//! A classed value may stand for some other underlying representation. The
//! proxy protocol unwraps it: given an object, produce the value that holds
//! its data. This is the one place classification calls into user code.
//!
//! - `Proxy`: the protocol itself
//! - `IdentityProxy`: the default method, returns the value unchanged
//! - `ProxyRegistry`: per-class methods, dispatched along the class vector

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use vector_kind_value::Value;

use crate::error::KindResult;

/// Unwraps an object into its underlying representation.
pub trait Proxy {
    fn proxy(&self, x: &Value) -> KindResult<Value>;
}

impl<F> Proxy for F
where
    F: Fn(&Value) -> KindResult<Value>,
{
    fn proxy(&self, x: &Value) -> KindResult<Value> {
        self(x)
    }
}

/// Default proxy method: a value is its own proxy.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProxy;

impl Proxy for IdentityProxy {
    fn proxy(&self, x: &Value) -> KindResult<Value> {
        Ok(x.clone())
    }
}

/// Proxy method registered for one class
pub type ProxyMethod = Arc<dyn Fn(&Value) -> KindResult<Value> + Send + Sync>;

/// Proxy methods keyed by class name.
///
/// Lookup walks the value's class vector from most to least specific and
/// calls the first registered method. Values with no matching method are
/// their own proxy.
#[derive(Clone, Default)]
pub struct ProxyRegistry {
    methods: HashMap<String, ProxyMethod>,
}

impl ProxyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `method` for `class`, replacing any previous method.
    pub fn register<S, F>(&mut self, class: S, method: F) -> &mut Self
    where
        S: Into<String>,
        F: Fn(&Value) -> KindResult<Value> + Send + Sync + 'static,
    {
        self.methods.insert(class.into(), Arc::new(method));
        self
    }

    /// Builder form of `register`
    pub fn with<S, F>(mut self, class: S, method: F) -> Self
    where
        S: Into<String>,
        F: Fn(&Value) -> KindResult<Value> + Send + Sync + 'static,
    {
        self.register(class, method);
        self
    }

    pub fn unregister(&mut self, class: &str) -> bool {
        self.methods.remove(class).is_some()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.methods.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Method that would handle `x`, if any
    pub fn lookup(&self, x: &Value) -> Option<&ProxyMethod> {
        x.class()?
            .names()
            .iter()
            .find_map(|name| self.methods.get(name))
    }
}

impl Proxy for ProxyRegistry {
    fn proxy(&self, x: &Value) -> KindResult<Value> {
        match self.lookup(x) {
            Some(method) => method(x),
            None => IdentityProxy.proxy(x),
        }
    }
}

impl fmt::Debug for ProxyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        classes.sort_unstable();
        f.debug_struct("ProxyRegistry")
            .field("classes", &classes)
            .finish()
    }
}
