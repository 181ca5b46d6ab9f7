// ============================================================================
// Operands
// Caller-supplied inputs and their conversion into operand lists
// ============================================================================

use smallvec::SmallVec;

/// A single caller-supplied input. `None` is a missing operand.
pub type Operand = Option<i64>;

/// Ordered operand sequence, stored inline for typical operand counts.
pub type OperandList = SmallVec<[Operand; 8]>;

/// Conversion into an ordered [`OperandList`].
///
/// Lets every list operation accept plain integers as well as sequences
/// that may contain missing operands:
///
/// ```
/// use integer_arithmetic::engine::sum_of;
/// use num_bigint::BigInt;
///
/// assert_eq!(sum_of([4, 7]).unwrap(), BigInt::from(11));
/// assert!(sum_of([Some(4), None]).is_err());
/// ```
pub trait IntoOperands {
    fn into_operands(self) -> OperandList;
}

impl IntoOperands for OperandList {
    fn into_operands(self) -> OperandList {
        self
    }
}

impl<const N: usize> IntoOperands for [i64; N] {
    fn into_operands(self) -> OperandList {
        self.into_iter().map(Some).collect()
    }
}

impl<const N: usize> IntoOperands for &[i64; N] {
    fn into_operands(self) -> OperandList {
        self.iter().copied().map(Some).collect()
    }
}

impl<const N: usize> IntoOperands for [Operand; N] {
    fn into_operands(self) -> OperandList {
        self.into_iter().collect()
    }
}

impl IntoOperands for &[i64] {
    fn into_operands(self) -> OperandList {
        self.iter().copied().map(Some).collect()
    }
}

impl IntoOperands for &[Operand] {
    fn into_operands(self) -> OperandList {
        self.iter().copied().collect()
    }
}

impl IntoOperands for Vec<i64> {
    fn into_operands(self) -> OperandList {
        self.into_iter().map(Some).collect()
    }
}

impl IntoOperands for &Vec<i64> {
    fn into_operands(self) -> OperandList {
        self.as_slice().into_operands()
    }
}

impl IntoOperands for Vec<Operand> {
    fn into_operands(self) -> OperandList {
        self.into_iter().collect()
    }
}

impl IntoOperands for &Vec<Operand> {
    fn into_operands(self) -> OperandList {
        self.as_slice().into_operands()
    }
}

/// Drop missing operands, keeping the order of the present ones.
pub fn without_missing(operands: &[Operand]) -> OperandList {
    operands.iter().copied().filter(Option::is_some).collect()
}
