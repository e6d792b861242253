//! Shared, copy-on-write vector storage
//!
//! Element storage lives behind an `Arc`, so cloning a `Vector` is O(1) and
//! the clones share storage until one of them writes. Writes go through
//! `Arc::make_mut`; a vector marked not-mutable always writes into a fresh
//! copy. Either way, no other holder of the storage observes the write.

use std::sync::Arc;

use crate::class::Class;
use crate::error::{ValueError, ValueResult};

/// Homogeneous vector with an optional class attribute
#[derive(Debug, Clone)]
pub struct Vector<T> {
    data: Arc<Vec<T>>,
    class: Option<Class>,
    mutable: bool,
}

impl<T: Clone> Vector<T> {
    /// Create a vector owning `data`
    pub fn new(data: Vec<T>) -> Self {
        Vector {
            data: Arc::new(data),
            class: None,
            mutable: true,
        }
    }

    /// Create a zero-length vector
    pub fn empty() -> Self {
        Vector::new(Vec::new())
    }

    /// Attach a class attribute. An empty class clears it.
    pub fn with_class(mut self, class: Class) -> Self {
        self.set_class(Some(class));
        self
    }

    pub fn class(&self) -> Option<&Class> {
        self.class.as_ref()
    }

    pub fn set_class(&mut self, class: Option<Class>) {
        self.class = class.filter(|c| !c.is_empty());
    }

    /// A vector carrying a class is an object.
    pub fn is_object(&self) -> bool {
        self.class.is_some()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mark the storage as permanently shared. Later writes through this
    /// handle copy first.
    pub fn mark_not_mutable(&mut self) {
        self.mutable = false;
    }

    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// Check whether two vectors share the same storage
    pub fn shares_storage(&self, other: &Vector<T>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Mutable access to the elements, copying shared or not-mutable storage.
    pub fn data_mut(&mut self) -> &mut Vec<T> {
        if !self.mutable {
            self.data = Arc::new(self.data.as_ref().clone());
            self.mutable = true;
        }
        Arc::make_mut(&mut self.data)
    }

    /// Overwrite the element at `index` (0-based)
    pub fn set(&mut self, index: usize, value: T) -> ValueResult<()> {
        if index >= self.len() {
            return Err(ValueError::bounds_error(index, self.len()));
        }
        self.data_mut()[index] = value;
        Ok(())
    }

    pub fn push(&mut self, value: T) {
        self.data_mut().push(value);
    }
}

impl<T: Clone> Default for Vector<T> {
    fn default() -> Self {
        Vector::empty()
    }
}

impl<T: Clone> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Vector::new(data)
    }
}

// Mutability is a property of the handle, not of the contents.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class && self.data == other.data
    }
}
