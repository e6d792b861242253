//! Class attribute and the class-based predicates
//!
//! A class is an ordered list of class names, most specific first. A value
//! carrying a class is an "object": classification may defer to user logic
//! for it.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Class name marking a tabular composite.
pub const DATA_FRAME_CLASS: &str = "data.frame";

/// Class names marking a record composite.
pub const RECORD_CLASSES: [&str; 2] = ["vctrs_rcrd", "POSIXlt"];

/// Ordered class vector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Class {
    names: Arc<[String]>,
}

impl Class {
    /// Create a class from names, most specific first.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Class {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a class with a single name
    pub fn single<S: Into<String>>(name: S) -> Self {
        Class::new([name])
    }

    /// Class names in dispatch order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Most specific class name
    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check whether `name` appears anywhere in the class vector
    pub fn inherits(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join("/"))
    }
}

/// Check whether `x` is a tabular composite (inherits `data.frame`).
pub fn is_data_frame(x: &Value) -> bool {
    x.class().is_some_and(|c| c.inherits(DATA_FRAME_CLASS))
}

/// Check whether `x` is a record composite.
pub fn is_record(x: &Value) -> bool {
    x.class()
        .is_some_and(|c| RECORD_CLASSES.iter().any(|name| c.inherits(name)))
}
