//! Complex root finding for single polynomials.

/// Newton-Raphson search with deflation.
pub mod newton;
