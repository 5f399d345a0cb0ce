//! Integer polynomials and their enumeration by height.

/// Height-bounded polynomial enumeration.
pub mod enumerate;
/// Complex-coefficient polynomial value type.
pub mod polynomial;
