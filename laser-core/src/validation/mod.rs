//! Input validation for quote orders.

mod validate;

pub use validate::{validate_material, validate_order, ValidationResult};
