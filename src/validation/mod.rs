// ============================================================================
// Validation Module
// Guards applied to operands before any arithmetic runs
// ============================================================================

mod guards;

pub use guards::{
    require_all_present, require_min_arity, require_non_empty, require_non_negative,
    require_non_zero, require_operands, require_present, require_within, Values,
};
