//! Error types for the algebra layer.

/// Errors from scalar, polynomial and matrix arithmetic.
///
/// These indicate misuse of the algebra layer. Inputs that went through
/// the validation in `reef-erasure` never surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GfError {
    /// Division by the zero element or by the zero polynomial.
    #[error("division by zero in GF(2^8)")]
    DivideByZero,

    /// The zero element has no multiplicative inverse.
    #[error("zero has no inverse in GF(2^8)")]
    InvertZero,

    /// Polynomial long division kept a non-zero leading coefficient
    /// where the elimination step must have cancelled it.
    #[error("inconsistent polynomial division state")]
    Algebra,
}
