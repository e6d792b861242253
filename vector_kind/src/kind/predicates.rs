//! Kind predicate methods

use super::Kind;

impl Kind {
    /// Check if this kind has a canonical empty container
    /// (`logical` through `list`).
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Kind::Logical
                | Kind::Integer
                | Kind::Double
                | Kind::Complex
                | Kind::Character
                | Kind::Raw
                | Kind::List
        )
    }

    /// Check if this is an atomic kind (primitive, excluding `list`)
    pub fn is_atomic(&self) -> bool {
        self.is_primitive() && !matches!(self, Kind::List)
    }

    /// Check if values of this kind are vectors without consulting a proxy
    pub fn is_vector_shaped(&self) -> bool {
        self.is_primitive() || matches!(self, Kind::DataFrame)
    }
}
