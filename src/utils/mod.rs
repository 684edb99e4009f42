//! Shared helpers for input validation, display and arithmetic.

pub mod numeric;
pub mod validation;
