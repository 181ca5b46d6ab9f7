// ============================================================================
// Domain Models Module
// Operands, operation names and calculator configuration
// ============================================================================

pub mod config;
pub mod operand;
pub mod operation;

pub use config::{CalculatorConfig, EvaluationPolicy};
pub use operand::{without_missing, IntoOperands, Operand, OperandList};
pub use operation::Operation;
