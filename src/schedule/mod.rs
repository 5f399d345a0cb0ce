//! Parallel generation of root points across enumerated polynomials.

/// Public generation API, options and result types.
pub mod generate;
pub(crate) mod pool;
pub(crate) mod sequential;
