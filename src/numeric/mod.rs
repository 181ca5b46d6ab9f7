// ============================================================================
// Numeric Module
// Error taxonomy and exact fixed-point helpers for integer arithmetic
// ============================================================================
//
// This module provides:
// - ArithmeticError / ErrorKind: typed failures of validation and arithmetic
// - FixedRatio<D>: scaled ratio with compile-time precision and round half-up
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (no panics)

mod errors;
mod fixed_ratio;

pub use errors::{ArithmeticError, ArithmeticResult, ErrorKind};
pub use fixed_ratio::FixedRatio;
