//! Plain integer arithmetic with a checked division.

use primer_core::{DomainError, DomainResult};

/// Sum of two integers.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Difference `a - b`.
pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

/// Product of two integers.
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Quotient `dividend / divisor` as a float.
///
/// Fails when the divisor is zero.
pub fn divide(dividend: i64, divisor: i64) -> DomainResult<f64> {
    if divisor == 0 {
        return Err(DomainError::invalid_argument("cannot divide by zero"));
    }
    Ok(dividend as f64 / divisor as f64)
}

/// Whether `n` is even.
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}
